use crate::application::dto::FetchMode;

/// LicensesRequest - Request DTO for the license report use case
#[derive(Debug, Clone, Default)]
pub struct LicensesRequest {
    /// How revisions are fetched
    pub fetch_mode: FetchMode,
}

impl LicensesRequest {
    pub fn new(fetch_mode: FetchMode) -> Self {
        Self { fetch_mode }
    }
}
