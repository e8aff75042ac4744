/// How a command's result is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Indented text / aligned tables for people
    #[default]
    Human,
    /// JSON for machines
    Structured,
}

impl RenderMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            RenderMode::Structured
        } else {
            RenderMode::Human
        }
    }
}

/// How much of the environment a command needs loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexScope {
    /// Names and versions only; skips the dependency query
    PackagesOnly,
    /// Names, versions and declared dependencies
    WithDependencies,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_from_json_flag() {
        assert_eq!(RenderMode::from_json_flag(true), RenderMode::Structured);
        assert_eq!(RenderMode::from_json_flag(false), RenderMode::Human);
    }

    #[test]
    fn test_render_mode_default_is_human() {
        assert_eq!(RenderMode::default(), RenderMode::Human);
    }
}
