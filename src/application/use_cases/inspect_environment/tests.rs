use super::*;
use chrono::Utc;
use std::cell::{Cell, RefCell};

// Mock implementations for testing
struct MockListing {
    packages: Vec<ListedPackage>,
    should_fail: bool,
}

impl PackageListingProvider for MockListing {
    fn list_packages(&self) -> Result<Vec<ListedPackage>> {
        if self.should_fail {
            return Err(InspectorError::collaborator("pip list", "exit status 1").into());
        }
        Ok(self.packages.clone())
    }
}

struct MockDependencies {
    edges: Vec<DependencyEdge>,
    should_fail: bool,
    calls: Cell<usize>,
}

impl DependencyProvider for MockDependencies {
    fn dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        self.calls.set(self.calls.get() + 1);
        if self.should_fail {
            return Err(InspectorError::collaborator("pip inspect", "unknown command").into());
        }
        Ok(self.edges.clone())
    }
}

struct MockProbe;

impl EnvironmentProbe for MockProbe {
    fn probe(&self) -> Result<EnvironmentSnapshot> {
        Ok(EnvironmentSnapshot::new(
            "/usr/bin/python3".to_string(),
            "3.12.1".to_string(),
            "Linux".to_string(),
            None,
            Utc::now(),
        ))
    }
}

#[derive(Default)]
struct RecordingReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn begin_task(&self, _message: &str) {}
    fn end_task(&self) {}
    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

type TestUseCase = InspectEnvironmentUseCase<MockListing, MockDependencies, MockProbe, RecordingReporter>;

fn use_case(packages: &[(&str, &str)], edges: &[(&str, &[&str])]) -> TestUseCase {
    InspectEnvironmentUseCase::new(
        MockListing {
            packages: packages
                .iter()
                .map(|(name, version)| ListedPackage::new(*name, *version))
                .collect(),
            should_fail: false,
        },
        MockDependencies {
            edges: edges
                .iter()
                .map(|(name, deps)| {
                    DependencyEdge::new(*name, deps.iter().map(|d| d.to_string()).collect())
                })
                .collect(),
            should_fail: false,
            calls: Cell::new(0),
        },
        MockProbe,
        RecordingReporter::default(),
    )
}

#[test]
fn test_load_index_merges_edges_by_key() {
    let use_case = use_case(
        &[("Flask", "3.0.0"), ("Werkzeug", "3.0.1"), ("click", "8.1.7")],
        &[("flask", &["werkzeug", "Click"]), ("werkzeug", &[])],
    );

    let index = use_case.load_index(IndexScope::WithDependencies).unwrap();

    assert_eq!(index.len(), 3);
    let flask = index.get("flask").unwrap();
    assert_eq!(flask.name(), "Flask");
    let deps: Vec<&str> = flask.dependency_keys().iter().map(|k| k.as_str()).collect();
    assert_eq!(deps, vec!["werkzeug", "click"]);
    assert!(index.get("click").unwrap().dependency_keys().is_empty());
}

#[test]
fn test_load_index_keeps_listing_order() {
    let use_case = use_case(&[("zope.interface", "6.1"), ("attrs", "23.2.0")], &[]);

    let index = use_case.load_index(IndexScope::WithDependencies).unwrap();

    let keys: Vec<&str> = index.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["zope-interface", "attrs"]);
}

#[test]
fn test_load_index_ignores_edges_for_unlisted_packages() {
    let use_case = use_case(&[("six", "1.16.0")], &[("phantom", &["six"])]);

    let index = use_case.load_index(IndexScope::WithDependencies).unwrap();

    assert_eq!(index.len(), 1);
    assert!(!index.contains("phantom"));
}

#[test]
fn test_packages_only_scope_skips_dependency_query() {
    let use_case = use_case(&[("six", "1.16.0")], &[("six", &["ghost"])]);

    let index = use_case.load_index(IndexScope::PackagesOnly).unwrap();

    assert_eq!(use_case.dependency_provider.calls.get(), 0);
    assert!(index.get("six").unwrap().dependency_keys().is_empty());
}

#[test]
fn test_load_index_reports_package_count() {
    let use_case = use_case(&[("six", "1.16.0"), ("attrs", "23.2.0")], &[]);

    use_case.load_index(IndexScope::PackagesOnly).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Detected 2 package(s)")));
}

#[test]
fn test_listing_failure_is_fatal() {
    let mut use_case = use_case(&[("six", "1.16.0")], &[]);
    use_case.listing_provider.should_fail = true;

    let err = use_case.load_index(IndexScope::WithDependencies).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InspectorError>(),
        Some(InspectorError::CollaboratorUnavailable { .. })
    ));
    assert_eq!(use_case.dependency_provider.calls.get(), 0);
}

#[test]
fn test_dependency_failure_is_fatal() {
    let mut use_case = use_case(&[("six", "1.16.0")], &[]);
    use_case.dependency_provider.should_fail = true;

    assert!(use_case.dependency_forest(RootSelection::Uncovered).is_err());

    let messages = use_case.progress_reporter.messages.borrow();
    assert_eq!(messages.as_slice(), ["❌ Dependency query failed"]);
}

#[test]
fn test_invalid_listing_entry_is_collaborator_error() {
    let use_case = use_case(&[("bad name!", "1.0")], &[]);

    let err = use_case.load_index(IndexScope::PackagesOnly).unwrap_err();

    match err.downcast_ref::<InspectorError>() {
        Some(InspectorError::CollaboratorUnavailable { details, .. }) => {
            assert!(details.contains("invalid characters"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_dependency_forest_end_to_end() {
    let use_case = use_case(&[("a", "1.0"), ("b", "2.0")], &[("a", &["b"]), ("b", &[])]);

    let forest = use_case.dependency_forest(RootSelection::Uncovered).unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].key().as_str(), "a");
    assert_eq!(forest[0].children()[0].key().as_str(), "b");
}

#[test]
fn test_dependency_forest_all_roots() {
    let use_case = use_case(&[("a", "1.0"), ("b", "2.0")], &[("a", &["b"])]);

    let forest = use_case.dependency_forest(RootSelection::All).unwrap();

    assert_eq!(forest.len(), 2);
}

#[test]
fn test_search_filters_and_preserves_order() {
    let use_case = use_case(
        &[("requests", "2.31.0"), ("urllib3", "2.1.0"), ("requests-oauthlib", "1.3.1")],
        &[],
    );

    let found = use_case.search("REQUESTS").unwrap();

    let names: Vec<&str> = found.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["requests", "requests-oauthlib"]);
}

#[test]
fn test_search_rejects_empty_query_before_querying() {
    let mut use_case = use_case(&[], &[]);
    use_case.listing_provider.should_fail = true;

    let err = use_case.search("  ").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<InspectorError>(),
        Some(InspectorError::InvalidArgument { .. })
    ));
}

#[test]
fn test_environment_info() {
    let use_case = use_case(&[], &[]);
    let snapshot = use_case.environment_info().unwrap();
    assert_eq!(snapshot.python_version(), "3.12.1");
}
