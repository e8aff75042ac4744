use pyenv_inspector::prelude::*;

/// Mock DependencyProvider returning fixed edges
#[derive(Default)]
pub struct MockDependencyProvider {
    edges: Vec<DependencyEdge>,
}

impl MockDependencyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.edges.push(DependencyEdge::new(
            name,
            dependencies.iter().map(|d| d.to_string()).collect(),
        ));
        self
    }
}

impl DependencyProvider for MockDependencyProvider {
    fn dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        Ok(self.edges.clone())
    }
}
