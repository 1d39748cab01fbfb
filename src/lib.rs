//! license-notice - third-party license notice generator
//!
//! This library turns the output of a dependency analysis into a plain-text
//! notice listing every license and the software provided under it,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`notice_generation`): Report model and license aggregation
//! - **Application Layer** (`application`): Use cases, fetch orchestration and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use license_notice::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let source = AnalysisFileReader::new(PathBuf::from(".license-notice/analysis.json"));
//! let fetcher = FossaRevisionClient::new(DEFAULT_ENDPOINT, None)?;
//! let renderer = TemplateRenderer::builtin(NoticeMetadata::current())?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = GenerateLicensesReportUseCase::new(source, fetcher, renderer, progress_reporter);
//! let response = use_case.execute(LicensesRequest::new(FetchMode::Exhaustive))?;
//!
//! StdoutPresenter::new().present(&response.content)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod notice_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        AnalysisFileReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{FossaRevisionClient, DEFAULT_ENDPOINT};
    pub use crate::adapters::outbound::templates::{TemplateRenderer, DEFAULT_TEMPLATE};
    pub use crate::application::dto::{FetchMode, LicensesRequest, LicensesResponse};
    pub use crate::application::use_cases::{
        FetchOutcome, GenerateLicensesReportUseCase, ItemFetchFailure, RevisionFetchOrchestrator,
    };
    pub use crate::notice_generation::domain::{
        AnalyzedModule, DependencyId, LicenseEntry, Locator, NoticeMetadata, Project,
        ReportModel, Revision,
    };
    pub use crate::notice_generation::services::LicenseAggregator;
    pub use crate::ports::outbound::{
        DependencySource, OutputPresenter, ProgressReporter, ReportRenderer, RevisionFetcher,
    };
    pub use crate::shared::Result;
}
