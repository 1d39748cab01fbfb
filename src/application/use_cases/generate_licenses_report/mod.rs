use crate::application::dto::{LicensesRequest, LicensesResponse};
use crate::application::use_cases::{FetchOutcome, ItemFetchFailure, RevisionFetchOrchestrator};
use crate::notice_generation::domain::{AnalyzedModule, ReportModel};
use crate::notice_generation::services::LicenseAggregator;
use crate::ports::outbound::{DependencySource, ProgressReporter, ReportRenderer, RevisionFetcher};
use crate::shared::Result;

/// GenerateLicensesReportUseCase - Core use case for license notice generation
///
/// Runs the pipeline load → fetch → aggregate → render using generic
/// dependency injection for all infrastructure.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `F` - RevisionFetcher implementation
/// * `R` - ReportRenderer implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateLicensesReportUseCase<S, F, R, P> {
    dependency_source: S,
    revision_fetcher: F,
    renderer: R,
    progress_reporter: P,
}

impl<S, F, R, P> GenerateLicensesReportUseCase<S, F, R, P>
where
    S: DependencySource,
    F: RevisionFetcher,
    R: ReportRenderer,
    P: ProgressReporter,
{
    /// Creates a new GenerateLicensesReportUseCase with injected dependencies
    pub fn new(dependency_source: S, revision_fetcher: F, renderer: R, progress_reporter: P) -> Self {
        Self {
            dependency_source,
            revision_fetcher,
            renderer,
            progress_reporter,
        }
    }

    /// Executes the license report use case
    ///
    /// # Returns
    /// LicensesResponse with the rendered notice. Dependencies skipped by an
    /// exhaustive fetch are listed in `skipped`; the run still succeeds.
    ///
    /// # Errors
    /// A source, bulk fetch or render failure aborts the run with no content.
    pub fn execute(&self, request: LicensesRequest) -> Result<LicensesResponse> {
        // Step 1: Load analyzed modules
        let modules = self.load_modules()?;

        // Step 2: Resolve revisions
        let FetchOutcome { revisions, failures } =
            RevisionFetchOrchestrator::new(&self.revision_fetcher, &self.progress_reporter)
                .fetch(&modules, request.fetch_mode)?;

        // Step 3: Surface skipped dependencies
        self.report_failures(&failures);

        // Step 4: Group by license
        let fetched_count = revisions.len();
        let report_model = LicenseAggregator::aggregate(revisions);
        self.report_summary(&report_model, fetched_count, failures.len());

        // Step 5: Render
        let content = self.renderer.render(&report_model)?;
        tracing::info!(bytes = content.len(), "rendered license notice");

        Ok(LicensesResponse::new(
            content,
            report_model,
            fetched_count,
            failures,
        ))
    }

    fn load_modules(&self) -> Result<Vec<AnalyzedModule>> {
        self.progress_reporter.report("📖 Loading analyzed modules");

        let modules = self.dependency_source.analyzed_modules()?;
        let dependency_count: usize = modules.iter().map(|m| m.dependencies().len()).sum();

        tracing::info!(
            modules = modules.len(),
            dependencies = dependency_count,
            "loaded analyzed modules"
        );
        self.progress_reporter.report(&format!(
            "✅ Detected {} module(s) with {} dependency reference(s)",
            modules.len(),
            dependency_count
        ));

        Ok(modules)
    }

    fn report_failures(&self, failures: &[ItemFetchFailure]) {
        for failure in failures {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not fetch license info for {} ({}); skipping.",
                failure.dependency, failure.details
            ));
        }
    }

    fn report_summary(&self, model: &ReportModel, fetched: usize, skipped: usize) {
        let mut summary = format!(
            "Fetched {} revision(s) covering {} license(s)",
            fetched,
            model.license_count()
        );
        if skipped > 0 {
            summary.push_str(&format!(", {} skipped", skipped));
        }
        self.progress_reporter.report_completion(&summary);
    }
}
