use crate::inspection::domain::{PackageIndex, PackageRecord, TreeNode};
use std::collections::HashSet;

/// Which index entries become top-level roots of the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootSelection {
    /// Skip packages already shown beneath an earlier root
    #[default]
    Uncovered,
    /// Every package gets its own root, even if it also appears as a dependency
    All,
}

/// Keys on the path from the current root down to the node being expanded
///
/// Scoped to a single root expansion: a package may show up under many
/// roots, but never twice on one path.
#[derive(Debug, Default)]
pub struct AncestorPath<'a> {
    keys: Vec<&'a str>,
    members: HashSet<&'a str>,
}

impl<'a> AncestorPath<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false, leaving the path unchanged, if `key` is already an ancestor
    pub fn enter(&mut self, key: &'a str) -> bool {
        if !self.members.insert(key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn leave(&mut self) -> Option<&'a str> {
        let key = self.keys.pop()?;
        self.members.remove(key);
        Some(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }
}

/// A package whose dependencies are being expanded
struct Frame<'a> {
    record: &'a PackageRecord,
    next_dependency: usize,
    children: Vec<TreeNode>,
}

impl<'a> Frame<'a> {
    fn new(record: &'a PackageRecord) -> Self {
        Self {
            record,
            next_dependency: 0,
            children: Vec::with_capacity(record.dependency_keys().len()),
        }
    }
}

/// ForestBuilder service turning a PackageIndex into a dependency forest
///
/// The traversal uses an explicit stack, so deep dependency chains cannot
/// overflow the call stack. It never fails: missing dependencies become
/// unresolved leaves and back-edges become cycle leaves.
pub struct ForestBuilder;

impl ForestBuilder {
    /// Builds one tree per root, in index order
    ///
    /// # Arguments
    /// * `index` - The installed packages
    /// * `selection` - Whether packages already shown as a dependency also get a root
    pub fn build(index: &PackageIndex, selection: RootSelection) -> Vec<TreeNode> {
        let mut covered: HashSet<&str> = HashSet::new();
        let mut forest = Vec::new();

        for record in index.iter() {
            if selection == RootSelection::Uncovered && covered.contains(record.key().as_str()) {
                continue;
            }
            forest.push(Self::expand(index, record, &mut covered));
        }

        tracing::debug!(
            roots = forest.len(),
            nodes = forest.iter().map(TreeNode::node_count).sum::<usize>(),
            "built dependency forest"
        );
        forest
    }

    /// Expands a single root, recording every key it reaches in `covered`
    fn expand<'a>(
        index: &'a PackageIndex,
        root: &'a PackageRecord,
        covered: &mut HashSet<&'a str>,
    ) -> TreeNode {
        let mut path = AncestorPath::new();
        path.enter(root.key().as_str());
        covered.insert(root.key().as_str());

        let mut stack = vec![Frame::new(root)];
        let mut finished = None;

        while let Some(frame) = stack.last_mut() {
            let record = frame.record;

            if let Some(dep) = record.dependency_keys().get(frame.next_dependency) {
                frame.next_dependency += 1;
                covered.insert(dep.as_str());

                if path.contains(dep.as_str()) {
                    frame
                        .children
                        .push(TreeNode::cycle(dep.clone(), index.get(dep.as_str()).cloned()));
                    continue;
                }

                match index.get(dep.as_str()) {
                    Some(dep_record) => {
                        path.enter(dep_record.key().as_str());
                        stack.push(Frame::new(dep_record));
                    }
                    None => frame.children.push(TreeNode::unresolved(dep.clone())),
                }
                continue;
            }

            // All dependencies expanded: fold this frame into its parent
            if let Some(done) = stack.pop() {
                path.leave();
                let node = TreeNode::resolved(done.record.clone(), done.children);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => finished = Some(node),
                }
            }
        }

        finished.unwrap_or_else(|| TreeNode::resolved(root.clone(), Vec::new()))
    }
}
