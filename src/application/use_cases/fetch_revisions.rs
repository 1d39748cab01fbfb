use crate::application::dto::FetchMode;
use crate::notice_generation::domain::{AnalyzedModule, DependencyId, Locator, Revision};
use crate::ports::outbound::{ProgressGuard, ProgressReporter, RevisionFetcher};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::HashSet;

/// A dependency an exhaustive fetch could not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFetchFailure {
    pub dependency: DependencyId,
    pub locator: Locator,
    pub details: String,
}

impl ItemFetchFailure {
    pub fn to_error(&self) -> ReportError {
        ReportError::ItemFetch {
            locator: self.locator.to_string(),
            details: self.details.clone(),
        }
    }
}

/// Result of the fetch step: every element of `revisions` is fully resolved.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub revisions: Vec<Revision>,
    pub failures: Vec<ItemFetchFailure>,
}

/// RevisionFetchOrchestrator - resolves analyzed dependencies into revisions
///
/// Takes the analyzed modules as an explicit argument. The union of their
/// dependencies is de-duplicated by locator (first occurrence wins) and
/// fetched sequentially on the calling thread.
///
/// Bulk failures are returned as `Err(ReportError::BulkFetch)`. Exhaustive
/// per-item failures come back inside [`FetchOutcome::failures`]; what to do
/// with them is the caller's decision.
pub struct RevisionFetchOrchestrator<'a, F: ?Sized, P: ?Sized> {
    fetcher: &'a F,
    progress_reporter: &'a P,
}

impl<'a, F, P> RevisionFetchOrchestrator<'a, F, P>
where
    F: RevisionFetcher + ?Sized,
    P: ProgressReporter + ?Sized,
{
    pub fn new(fetcher: &'a F, progress_reporter: &'a P) -> Self {
        Self {
            fetcher,
            progress_reporter,
        }
    }

    pub fn fetch(&self, modules: &[AnalyzedModule], mode: FetchMode) -> Result<FetchOutcome> {
        let dependencies = Self::unique_dependencies(modules);
        if dependencies.is_empty() {
            return Ok(FetchOutcome::default());
        }

        // Clears the spinner on every exit path below
        let _progress = ProgressGuard::new(self.progress_reporter);

        match mode {
            FetchMode::Bulk => self.fetch_bulk(dependencies),
            FetchMode::Exhaustive => Ok(self.fetch_exhaustive(dependencies)),
        }
    }

    fn unique_dependencies(modules: &[AnalyzedModule]) -> Vec<(Locator, &DependencyId)> {
        let mut seen = HashSet::new();
        modules
            .iter()
            .flat_map(|module| module.dependencies())
            .map(|dep| (Locator::of(dep), dep))
            .filter(|(locator, _)| seen.insert(locator.to_string()))
            .collect()
    }

    fn fetch_bulk(&self, dependencies: Vec<(Locator, &DependencyId)>) -> Result<FetchOutcome> {
        let total = dependencies.len();
        self.progress_reporter
            .report_progress(0, total, Some("Fetching license info"));

        let locators: Vec<Locator> = dependencies.into_iter().map(|(l, _)| l).collect();
        let revisions = self.fetcher.fetch_many(&locators).map_err(|e| {
            tracing::error!(error = %format!("{:#}", e), count = total, "bulk revision fetch failed");
            ReportError::BulkFetch {
                count: total,
                details: format!("{:#}", e),
            }
        })?;

        tracing::info!(
            requested = total,
            resolved = revisions.len(),
            "bulk revision fetch complete"
        );

        Ok(FetchOutcome {
            revisions,
            failures: Vec::new(),
        })
    }

    fn fetch_exhaustive(&self, dependencies: Vec<(Locator, &DependencyId)>) -> FetchOutcome {
        let total = dependencies.len();
        let mut outcome = FetchOutcome::default();

        for (idx, (locator, dependency)) in dependencies.into_iter().enumerate() {
            let current = idx + 1;
            self.progress_reporter.report_progress(
                current,
                total,
                Some(&format!(
                    "Fetching license info ({}/{}): {}",
                    current,
                    total,
                    dependency.package()
                )),
            );

            match self.fetcher.fetch_one(&locator) {
                Ok(revision) => outcome.revisions.push(revision),
                Err(e) => {
                    let details = format!("{:#}", e);
                    tracing::warn!(%locator, error = %details, "skipping dependency");
                    outcome.failures.push(ItemFetchFailure {
                        dependency: dependency.clone(),
                        locator,
                        details,
                    });
                }
            }
        }

        tracing::info!(
            requested = total,
            resolved = outcome.revisions.len(),
            skipped = outcome.failures.len(),
            "exhaustive revision fetch complete"
        );

        outcome
    }
}
