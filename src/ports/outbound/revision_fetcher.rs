use crate::notice_generation::domain::{Locator, Revision};
use crate::shared::Result;

/// RevisionFetcher port for resolving locators into revisions
///
/// This port abstracts the license metadata service. Both calls block the
/// calling thread until the service answers.
pub trait RevisionFetcher {
    /// Fetches the revision for a single locator
    ///
    /// # Errors
    /// Returns an error if the request fails, the service rejects it, or
    /// the response cannot be parsed
    fn fetch_one(&self, locator: &Locator) -> Result<Revision>;

    /// Fetches revisions for many locators in one logical call
    ///
    /// The service may return fewer revisions than locators; locators it
    /// cannot resolve are simply absent from the result.
    ///
    /// # Errors
    /// Returns an error if any part of the call fails
    fn fetch_many(&self, locators: &[Locator]) -> Result<Vec<Revision>>;
}

impl<T: RevisionFetcher + ?Sized> RevisionFetcher for &T {
    fn fetch_one(&self, locator: &Locator) -> Result<Revision> {
        (**self).fetch_one(locator)
    }

    fn fetch_many(&self, locators: &[Locator]) -> Result<Vec<Revision>> {
        (**self).fetch_many(locators)
    }
}
