/// ProgressReporter port for human-facing progress output
///
/// Progress is a presentation concern only: nothing reported here affects
/// the generated notice.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Shows an in-flight activity, e.g. a spinner with a message
    ///
    /// # Arguments
    /// * `current` - 1-based position of the current item
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Stops any in-flight progress display. Must be safe to call repeatedly.
    fn finish(&self);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }

    fn finish(&self) {
        (**self).finish()
    }
}

/// Stops the reporter's progress display when dropped
///
/// Holding one for the duration of a fetch guarantees the spinner is cleared
/// on success, after skipped items, and on an early `?` return.
pub struct ProgressGuard<'a, P: ProgressReporter + ?Sized> {
    reporter: &'a P,
}

impl<'a, P: ProgressReporter + ?Sized> ProgressGuard<'a, P> {
    pub fn new(reporter: &'a P) -> Self {
        Self { reporter }
    }
}

impl<P: ProgressReporter + ?Sized> Drop for ProgressGuard<'_, P> {
    fn drop(&mut self) {
        self.reporter.finish();
    }
}
