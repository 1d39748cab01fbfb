use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A partial report (some dependencies skipped in exhaustive mode) still
/// exits with `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered and presented
    Success = 0,
    /// Fetch, template, or I/O failure; no report was emitted
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for license notice generation.
///
/// `ItemFetch` is the only recoverable kind: the orchestrator hands it back
/// inside a fetch outcome instead of returning it as an `Err`.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not fetch revisions for {count} locator(s)\nDetails: {details}\n\n💡 Hint: Check your API key, endpoint, and network connection, or retry with --include-unknown to fetch dependencies one at a time")]
    BulkFetch { count: usize, details: String },

    #[error("Could not fetch revision {locator}\nDetails: {details}")]
    ItemFetch { locator: String, details: String },

    #[error("Could not parse template data: {name}\nDetails: {details}\n\n💡 Hint: Check the template syntax")]
    TemplateParse { name: String, details: String },

    #[error("Could not render template: {name}\nDetails: {details}")]
    TemplateRender { name: String, details: String },

    #[error("Analysis file not found: {path}\n\n💡 Hint: {suggestion}")]
    AnalysisNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse analysis file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a JSON array of analyzed modules")]
    AnalysisParse { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid locator: {locator}\nReason: {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
