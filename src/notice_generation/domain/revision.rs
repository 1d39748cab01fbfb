use crate::notice_generation::domain::Locator;
use serde::Serialize;

/// Project metadata attached to a revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    title: String,
    url: String,
}

impl Project {
    pub fn new(title: String, url: String) -> Self {
        Self { title, url }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A single license declared by a revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseEntry {
    license_id: String,
}

impl LicenseEntry {
    pub fn new(license_id: String) -> Self {
        Self { license_id }
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }
}

/// Resolved license and project metadata for one locator.
///
/// Immutable once fetched. Multi-licensed software carries several entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revision {
    locator: Locator,
    project: Project,
    licenses: Vec<LicenseEntry>,
}

impl Revision {
    pub fn new(locator: Locator, project: Project, licenses: Vec<LicenseEntry>) -> Self {
        Self {
            locator,
            project,
            licenses,
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn licenses(&self) -> &[LicenseEntry] {
        &self.licenses
    }
}
