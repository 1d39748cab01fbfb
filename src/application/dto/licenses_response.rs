use crate::application::use_cases::ItemFetchFailure;
use crate::notice_generation::domain::ReportModel;

/// LicensesResponse - Response DTO from the license report use case
///
/// Only produced when the run succeeded; `skipped` lists the dependencies an
/// exhaustive fetch could not resolve.
#[derive(Debug, Clone)]
pub struct LicensesResponse {
    /// The rendered notice
    pub content: String,
    /// The grouping the notice was rendered from
    pub report_model: ReportModel,
    /// Number of revisions the fetch step returned
    pub fetched_count: usize,
    /// Dependencies skipped because their fetch failed
    pub skipped: Vec<ItemFetchFailure>,
}

impl LicensesResponse {
    pub fn new(
        content: String,
        report_model: ReportModel,
        fetched_count: usize,
        skipped: Vec<ItemFetchFailure>,
    ) -> Self {
        Self {
            content,
            report_model,
            fetched_count,
            skipped,
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}
