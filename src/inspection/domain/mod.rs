pub mod environment;
pub mod package;
pub mod package_index;
pub mod tree;

pub use environment::EnvironmentSnapshot;
pub use package::{PackageKey, PackageName, PackageRecord, Version};
pub use package_index::PackageIndex;
pub use tree::{NodeKind, TreeNode};
