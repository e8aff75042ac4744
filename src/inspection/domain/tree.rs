use super::{PackageKey, PackageRecord};

/// How a node in the dependency forest was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Installed package, expanded into its dependencies
    Resolved,
    /// Declared dependency with no installed record
    Unresolved,
    /// Key already on the ancestor path; expansion stops here
    Cycle,
}

/// A node of the dependency forest
///
/// Each node is owned by exactly one parent. A package reached through
/// several dependency chains appears as separate nodes.
///
/// Dropping and comparing walk the subtree with an explicit stack, so a
/// chain of any depth can be released without exhausting the call stack.
#[derive(Debug)]
pub struct TreeNode {
    key: PackageKey,
    record: Option<PackageRecord>,
    kind: NodeKind,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn resolved(record: PackageRecord, children: Vec<TreeNode>) -> Self {
        Self {
            key: record.key().clone(),
            record: Some(record),
            kind: NodeKind::Resolved,
            children,
        }
    }

    pub fn unresolved(key: PackageKey) -> Self {
        Self {
            key,
            record: None,
            kind: NodeKind::Unresolved,
            children: Vec::new(),
        }
    }

    pub fn cycle(key: PackageKey, record: Option<PackageRecord>) -> Self {
        Self {
            key,
            record,
            kind: NodeKind::Cycle,
            children: Vec::new(),
        }
    }

    pub fn key(&self) -> &PackageKey {
        &self.key
    }

    pub fn record(&self) -> Option<&PackageRecord> {
        self.record.as_ref()
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_unresolved(&self) -> bool {
        self.kind == NodeKind::Unresolved
    }

    pub fn is_cycle(&self) -> bool {
        self.kind == NodeKind::Cycle
    }

    /// Display name, falling back to the key for unresolved nodes
    pub fn display_name(&self) -> &str {
        self.record
            .as_ref()
            .map(|record| record.name())
            .unwrap_or_else(|| self.key.as_str())
    }

    pub fn version(&self) -> Option<&str> {
        self.record.as_ref().map(|record| record.version())
    }

    /// Total number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path, including this one
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.key != right.key
                || left.kind != right.kind
                || left.record != right.record
                || left.children.len() != right.children.len()
            {
                return false;
            }
            pending.extend(left.children.iter().zip(right.children.iter()));
        }
        true
    }
}

impl Eq for TreeNode {}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
