use crate::notice_generation::domain::ReportModel;
use crate::shared::Result;

/// ReportRenderer port turning a report model into the notice document
pub trait ReportRenderer {
    /// Renders the report model into plain text
    ///
    /// # Errors
    /// Returns an error if the template fails while rendering
    fn render(&self, model: &ReportModel) -> Result<String>;
}

impl<T: ReportRenderer + ?Sized> ReportRenderer for Box<T> {
    fn render(&self, model: &ReportModel) -> Result<String> {
        (**self).render(model)
    }
}

impl<T: ReportRenderer + ?Sized> ReportRenderer for &T {
    fn render(&self, model: &ReportModel) -> Result<String> {
        (**self).render(model)
    }
}
