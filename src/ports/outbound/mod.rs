/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (analysis output, license service,
/// templates, console, output sink).
pub mod dependency_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_renderer;
pub mod revision_fetcher;

pub use dependency_source::DependencySource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::{ProgressGuard, ProgressReporter};
pub use report_renderer::ReportRenderer;
pub use revision_fetcher::RevisionFetcher;
