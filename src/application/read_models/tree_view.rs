//! Structured view of the dependency forest
//!
//! Mirrors `TreeNode` field for field so the JSON output of `tree --json`
//! can be read back into an equivalent forest.

use crate::inspection::domain::{PackageKey, PackageRecord, TreeNode};
use crate::shared::Result;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// View representation of one forest node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNodeView {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unresolved: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub cycle: bool,
    #[serde(default)]
    pub children: Vec<TreeNodeView>,
}

impl From<&TreeNode> for TreeNodeView {
    fn from(node: &TreeNode) -> Self {
        Self {
            key: node.key().to_string(),
            name: node.record().map(|record| record.name().to_string()),
            version: node.version().map(str::to_string),
            unresolved: node.is_unresolved(),
            cycle: node.is_cycle(),
            children: node.children().iter().map(TreeNodeView::from).collect(),
        }
    }
}

impl TreeNodeView {
    /// Rebuilds the domain node
    ///
    /// A resolved node's dependency keys are taken from its children, since
    /// those are exactly the dependencies the builder expanded.
    ///
    /// # Errors
    /// Returns an error if a resolved node has no version, or if a name or
    /// version fails validation
    pub fn into_node(self) -> Result<TreeNode> {
        let key = PackageKey::normalize(&self.key);

        if self.unresolved {
            return Ok(TreeNode::unresolved(key));
        }

        if self.cycle {
            let record = match self.version {
                Some(version) => Some(PackageRecord::new(
                    self.name.unwrap_or_else(|| self.key.clone()),
                    version,
                    &[] as &[&str],
                )?),
                None => None,
            };
            return Ok(TreeNode::cycle(key, record));
        }

        let Some(version) = self.version else {
            anyhow::bail!("Node '{}' is neither unresolved nor versioned", self.key);
        };
        let dependency_keys: Vec<&str> = self.children.iter().map(|c| c.key.as_str()).collect();
        let record = PackageRecord::new(
            self.name.clone().unwrap_or_else(|| self.key.clone()),
            version,
            &dependency_keys,
        )?;
        let children = self
            .children
            .into_iter()
            .map(TreeNodeView::into_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(TreeNode::resolved(record, children))
    }
}
