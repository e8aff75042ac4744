use crate::inspection::domain::{PackageIndex, PackageKey, PackageRecord};
use crate::shared::error::InspectorError;
use crate::shared::Result;

/// PackageSearch service for case-insensitive substring lookup
///
/// Matches against both the display name and the normalized key, so
/// `typing_ext` finds `typing-extensions`.
pub struct PackageSearch {
    needle: String,
    key_needle: PackageKey,
}

impl PackageSearch {
    /// Creates a search for `query`
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the query is empty or only whitespace
    pub fn new(query: &str) -> Result<Self> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(InspectorError::invalid_argument("search query must not be empty").into());
        }
        let key_needle = PackageKey::normalize(&needle);
        Ok(Self { needle, key_needle })
    }

    pub fn matches(&self, record: &PackageRecord) -> bool {
        record.name().to_lowercase().contains(&self.needle)
            || record.key().as_str().contains(self.key_needle.as_str())
    }

    /// Matching records in index order
    pub fn run<'a>(&self, index: &'a PackageIndex) -> Vec<&'a PackageRecord> {
        index.iter().filter(|record| self.matches(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PackageIndex {
        PackageIndex::build(vec![
            PackageRecord::new("requests".to_string(), "2.31.0".to_string(), &["urllib3"]).unwrap(),
            PackageRecord::new("urllib3".to_string(), "2.1.0".to_string(), &[] as &[&str]).unwrap(),
            PackageRecord::new("typing_extensions".to_string(), "4.9.0".to_string(), &[] as &[&str])
                .unwrap(),
            PackageRecord::new("PyYAML".to_string(), "6.0.1".to_string(), &[] as &[&str]).unwrap(),
        ])
    }

    fn names(records: &[&PackageRecord]) -> Vec<String> {
        records.iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_substring_match() {
        let index = index();
        let search = PackageSearch::new("lib").unwrap();
        assert_eq!(names(&search.run(&index)), vec!["urllib3"]);
    }

    #[test]
    fn test_case_insensitive() {
        let index = index();
        let search = PackageSearch::new("yaml").unwrap();
        assert_eq!(names(&search.run(&index)), vec!["PyYAML"]);

        let search = PackageSearch::new("REQ").unwrap();
        assert_eq!(names(&search.run(&index)), vec!["requests"]);
    }

    #[test]
    fn test_separator_insensitive() {
        let index = index();
        let search = PackageSearch::new("typing-ext").unwrap();
        assert_eq!(names(&search.run(&index)), vec!["typing_extensions"]);

        let search = PackageSearch::new("typing.ext").unwrap();
        assert_eq!(names(&search.run(&index)), vec!["typing_extensions"]);
    }

    #[test]
    fn test_separator_runs_collapse_like_keys() {
        let index = index();
        for query in ["typing__ext", "Typing-_.Extensions"] {
            let search = PackageSearch::new(query).unwrap();
            assert_eq!(names(&search.run(&index)), vec!["typing_extensions"]);
        }
    }

    #[test]
    fn test_results_in_index_order() {
        let index = index();
        let search = PackageSearch::new("s").unwrap();
        assert_eq!(
            names(&search.run(&index)),
            vec!["requests", "typing_extensions"]
        );
    }

    #[test]
    fn test_no_match() {
        let index = index();
        let search = PackageSearch::new("numpy").unwrap();
        assert!(search.run(&index).is_empty());
    }

    #[test]
    fn test_empty_query_is_invalid_argument() {
        for query in ["", "   "] {
            let err = PackageSearch::new(query).err().unwrap();
            assert!(matches!(
                err.downcast_ref::<InspectorError>(),
                Some(InspectorError::InvalidArgument { .. })
            ));
        }
    }
}
