use crate::application::dto::RenderMode;
use crate::application::read_models::TreeNodeView;
use crate::inspection::domain::{NodeKind, TreeNode};
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Guide drawn before a non-last child
const BRANCH: &str = "├── ";
/// Guide drawn before the last child of a parent
const LAST_BRANCH: &str = "└── ";
/// Continuation column under a non-last ancestor
const PIPE: &str = "│   ";
/// Continuation column under a last ancestor
const SPACE: &str = "    ";

/// Deepest tree `parse_structured` can read back: serde_json stops at 128
/// nested arrays and objects, and every tree level adds one of each
const MAX_STRUCTURED_DEPTH: usize = 63;

const NOT_INSTALLED_MARKER: &str = "[not installed]";
const CYCLE_MARKER: &str = "[cycle]";

/// TreeRenderer adapter for the dependency forest
///
/// Renders the forest either as indented text with box-drawing guides or
/// as a JSON array of nodes. Rendering never mutates the forest, so the
/// same forest always renders to the same string.
pub struct TreeRenderer {
    colored: bool,
}

impl TreeRenderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn render(&self, forest: &[TreeNode], mode: RenderMode) -> Result<String> {
        match mode {
            RenderMode::Human => Ok(self.render_human(forest)),
            RenderMode::Structured => Self::render_structured(forest),
        }
    }

    /// Reads the output of `RenderMode::Structured` back into a forest
    pub fn parse_structured(json: &str) -> Result<Vec<TreeNode>> {
        let views: Vec<TreeNodeView> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Failed to parse tree JSON: {}", e))?;
        views.into_iter().map(TreeNodeView::into_node).collect()
    }

    fn render_structured(forest: &[TreeNode]) -> Result<String> {
        let depth = forest.iter().map(TreeNode::depth).max().unwrap_or(0);
        if depth > MAX_STRUCTURED_DEPTH {
            anyhow::bail!(
                "Dependency tree is {} levels deep; structured output supports at most {}",
                depth,
                MAX_STRUCTURED_DEPTH
            );
        }
        let views: Vec<TreeNodeView> = forest.iter().map(TreeNodeView::from).collect();
        let mut json = serde_json::to_string_pretty(&views)
            .map_err(|e| anyhow::anyhow!("Failed to serialize tree: {}", e))?;
        json.push('\n');
        Ok(json)
    }

    /// Depth-first walk with an explicit stack
    ///
    /// `guides[i]` records whether the ancestor at depth `i + 1` was the last
    /// child of its parent, which decides between `PIPE` and `SPACE`.
    fn render_human(&self, forest: &[TreeNode]) -> String {
        let mut output = String::new();
        let mut guides: Vec<bool> = Vec::new();
        let mut stack: Vec<(&TreeNode, usize, bool)> =
            forest.iter().rev().map(|root| (root, 0, true)).collect();

        while let Some((node, depth, is_last)) = stack.pop() {
            if depth > 0 {
                guides.truncate(depth - 1);
                for &ancestor_is_last in &guides {
                    output.push_str(if ancestor_is_last { SPACE } else { PIPE });
                }
                output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
                guides.push(is_last);
            }
            output.push_str(&self.label(node));
            output.push('\n');

            let children = node.children();
            for (i, child) in children.iter().enumerate().rev() {
                stack.push((child, depth + 1, i + 1 == children.len()));
            }
        }

        output
    }

    fn label(&self, node: &TreeNode) -> String {
        let name = node.display_name();
        let version = node.version().map(|v| format!("({})", v));

        let (name, version, marker) = if self.colored {
            let name = match node.kind() {
                NodeKind::Resolved => name.bold().to_string(),
                NodeKind::Unresolved => name.yellow().to_string(),
                NodeKind::Cycle => name.cyan().to_string(),
            };
            let version = version.map(|v| v.dimmed().to_string());
            let marker = match node.kind() {
                NodeKind::Resolved => None,
                NodeKind::Unresolved => Some(NOT_INSTALLED_MARKER.yellow().to_string()),
                NodeKind::Cycle => Some(CYCLE_MARKER.cyan().to_string()),
            };
            (name, version, marker)
        } else {
            let marker = match node.kind() {
                NodeKind::Resolved => None,
                NodeKind::Unresolved => Some(NOT_INSTALLED_MARKER.to_string()),
                NodeKind::Cycle => Some(CYCLE_MARKER.to_string()),
            };
            (name.to_string(), version, marker)
        };

        [Some(name), version, marker]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
