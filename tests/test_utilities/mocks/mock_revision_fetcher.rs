use license_notice::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock RevisionFetcher backed by an in-memory revision table
///
/// Locators registered with `with_failure` fail in `fetch_one` and are left
/// out of `fetch_many` results. Every call is recorded.
#[derive(Default, Clone)]
pub struct MockRevisionFetcher {
    revisions: HashMap<String, (String, String, Vec<String>)>,
    failures: HashSet<String>,
    bulk_error: Option<String>,
    fetch_one_calls: Arc<Mutex<Vec<String>>>,
    fetch_many_calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockRevisionFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_revision(mut self, locator: &str, title: &str, url: &str, licenses: &[&str]) -> Self {
        self.revisions.insert(
            locator.to_string(),
            (
                title.to_string(),
                url.to_string(),
                licenses.iter().map(|l| l.to_string()).collect(),
            ),
        );
        self
    }

    pub fn with_failure(mut self, locator: &str) -> Self {
        self.failures.insert(locator.to_string());
        self
    }

    pub fn with_bulk_error(mut self, message: &str) -> Self {
        self.bulk_error = Some(message.to_string());
        self
    }

    pub fn fetch_one_calls(&self) -> Vec<String> {
        self.fetch_one_calls.lock().unwrap().clone()
    }

    pub fn fetch_many_calls(&self) -> Vec<Vec<String>> {
        self.fetch_many_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.fetch_one_calls().len() + self.fetch_many_calls().len()
    }

    fn lookup(&self, locator: &Locator) -> Option<Revision> {
        let (title, url, licenses) = self.revisions.get(&locator.to_string())?;
        Some(Revision::new(
            locator.clone(),
            Project::new(title.clone(), url.clone()),
            licenses
                .iter()
                .map(|id| LicenseEntry::new(id.clone()))
                .collect(),
        ))
    }
}

impl RevisionFetcher for MockRevisionFetcher {
    fn fetch_one(&self, locator: &Locator) -> Result<Revision> {
        let key = locator.to_string();
        self.fetch_one_calls.lock().unwrap().push(key.clone());

        if self.failures.contains(&key) {
            anyhow::bail!("Revision service returned status code 404 Not Found");
        }
        self.lookup(locator)
            .ok_or_else(|| anyhow::anyhow!("No revision registered for {}", key))
    }

    fn fetch_many(&self, locators: &[Locator]) -> Result<Vec<Revision>> {
        self.fetch_many_calls
            .lock()
            .unwrap()
            .push(locators.iter().map(|l| l.to_string()).collect());

        if let Some(message) = &self.bulk_error {
            anyhow::bail!("{}", message);
        }
        Ok(locators
            .iter()
            .filter(|l| !self.failures.contains(&l.to_string()))
            .filter_map(|l| self.lookup(l))
            .collect())
    }
}
