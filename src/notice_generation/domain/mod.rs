pub mod dependency;
pub mod locator;
pub mod notice_metadata;
pub mod report_model;
pub mod revision;

pub use dependency::{AnalyzedModule, DependencyId};
pub use locator::Locator;
pub use notice_metadata::NoticeMetadata;
pub use report_model::{LicenseGroup, ReportModel};
pub use revision::{LicenseEntry, Project, Revision};
