use crate::shared::Result;

/// OutputPresenter port for delivering the rendered notice
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Writes the rendered notice to the destination
    ///
    /// # Errors
    /// Returns an error if writing fails; callers do not retry
    fn present(&self, content: &str) -> Result<()>;
}
