use crate::notice_generation::domain::AnalyzedModule;
use crate::shared::Result;

/// DependencySource port supplying the output of a previous analysis step
///
/// The modules it returns are passed explicitly into the fetch step; there is
/// no process-wide module list.
pub trait DependencySource {
    /// Returns every analyzed module with its dependencies
    ///
    /// # Errors
    /// Returns an error if the analysis output is missing or malformed
    fn analyzed_modules(&self) -> Result<Vec<AnalyzedModule>>;
}

impl<T: DependencySource + ?Sized> DependencySource for &T {
    fn analyzed_modules(&self) -> Result<Vec<AnalyzedModule>> {
        (**self).analyzed_modules()
    }
}
