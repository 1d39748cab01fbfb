/// Mock implementations for testing
mod mock_dependency_source;
mod mock_progress_reporter;
mod mock_revision_fetcher;

pub use mock_dependency_source::MockDependencySource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_revision_fetcher::MockRevisionFetcher;
