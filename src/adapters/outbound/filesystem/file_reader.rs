use crate::notice_generation::domain::AnalyzedModule;
use crate::ports::outbound::DependencySource;
use crate::shared::error::ReportError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::path::PathBuf;

/// AnalysisFileReader adapter reading analyzed modules from a JSON file
///
/// The file is the hand-off from the analysis step: a JSON array of
/// `{ "name": ..., "dependencies": [{ "fetcher", "package", "revision" }] }`.
pub struct AnalysisFileReader {
    path: PathBuf,
}

impl AnalysisFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DependencySource for AnalysisFileReader {
    fn analyzed_modules(&self) -> Result<Vec<AnalyzedModule>> {
        if !self.path.exists() {
            return Err(ReportError::AnalysisNotFound {
                path: self.path.clone(),
                suggestion: "Run the analysis step first, or point --analysis at its output file."
                    .to_string(),
            }
            .into());
        }

        let content = read_regular_file(&self.path, "analysis file", MAX_FILE_SIZE).map_err(
            |e| ReportError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            },
        )?;

        let modules: Vec<AnalyzedModule> =
            serde_json::from_str(&content).map_err(|e| ReportError::AnalysisParse {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            modules = modules.len(),
            "loaded analysis file"
        );

        Ok(modules)
    }
}
