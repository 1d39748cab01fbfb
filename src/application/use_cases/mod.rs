/// Use cases module containing application business logic orchestration
mod fetch_revisions;
mod generate_licenses_report;

pub use fetch_revisions::{FetchOutcome, ItemFetchFailure, RevisionFetchOrchestrator};
pub use generate_licenses_report::GenerateLicensesReportUseCase;
