use license_notice::prelude::*;

/// Mock DependencySource returning a fixed set of analyzed modules
#[derive(Default, Clone)]
pub struct MockDependencySource {
    modules: Vec<AnalyzedModule>,
    error: Option<String>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module whose dependencies are given as `(fetcher, package, revision)`
    pub fn with_module(mut self, name: &str, dependencies: &[(&str, &str, &str)]) -> Self {
        let dependencies = dependencies
            .iter()
            .map(|(fetcher, package, revision)| {
                DependencyId::new(
                    fetcher.to_string(),
                    package.to_string(),
                    revision.to_string(),
                )
                .unwrap()
            })
            .collect();
        self.modules
            .push(AnalyzedModule::new(name.to_string(), dependencies));
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            modules: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

impl DependencySource for MockDependencySource {
    fn analyzed_modules(&self) -> Result<Vec<AnalyzedModule>> {
        match &self.error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(self.modules.clone()),
        }
    }
}
