pub mod forest_builder;
pub mod package_search;

pub use forest_builder::{ForestBuilder, RootSelection};
pub use package_search::PackageSearch;
