use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for a distribution's display name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only ASCII letters, digits, hyphens, underscores and dots are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The normalized key for this name
    pub fn key(&self) -> PackageKey {
        PackageKey::normalize(&self.0)
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized package identifier
///
/// Lowercase, with every run of `-`, `_` and `.` collapsed into a single `-`,
/// so `Foo.Bar`, `foo_bar` and `FOO--bar` share the key `foo-bar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn normalize(raw: &str) -> Self {
        let mut key = String::with_capacity(raw.len());
        let mut in_separator = false;
        for c in raw.trim().chars() {
            if matches!(c, '-' | '_' | '.') {
                if !in_separator {
                    key.push('-');
                }
                in_separator = true;
            } else {
                key.extend(c.to_lowercase());
                in_separator = false;
            }
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PackageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// NewType wrapper for an installed version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // Epochs (`1!2.0`) and local labels (`1.0+cpu`) are valid installed versions
        if !version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+' | '!'))
        {
            anyhow::bail!(
                "Package version '{}' contains invalid characters. Only ASCII letters, digits, dots, hyphens, underscores, plus and exclamation marks are allowed.",
                version
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An installed package together with the keys of the packages it requires
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    key: PackageKey,
    name: PackageName,
    version: Version,
    dependency_keys: Vec<PackageKey>,
}

impl PackageRecord {
    pub fn new<S: AsRef<str>>(name: String, version: String, dependencies: &[S]) -> Result<Self> {
        let name = PackageName::new(name)?;
        Ok(Self {
            key: name.key(),
            name,
            version: Version::new(version)?,
            dependency_keys: dependencies
                .iter()
                .map(|dep| PackageKey::normalize(dep.as_ref()))
                .collect(),
        })
    }

    pub fn key(&self) -> &PackageKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn dependency_keys(&self) -> &[PackageKey] {
        &self.dependency_keys
    }
}
