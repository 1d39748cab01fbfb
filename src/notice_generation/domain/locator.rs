use crate::notice_generation::domain::DependencyId;
use crate::shared::error::ReportError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical coordinate of one dependency version: `fetcher+package$revision`.
///
/// The string form is the dedup key for revisions throughout a report run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator {
    fetcher: String,
    package: String,
    revision: String,
}

impl Locator {
    /// Derives the locator for a dependency identity
    pub fn of(id: &DependencyId) -> Self {
        Self {
            fetcher: id.fetcher().to_string(),
            package: id.package().to_string(),
            revision: id.revision().to_string(),
        }
    }

    pub fn fetcher(&self) -> &str {
        &self.fetcher
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }
}

impl From<&DependencyId> for Locator {
    fn from(id: &DependencyId) -> Self {
        Locator::of(id)
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}${}", self.fetcher, self.package, self.revision)
    }
}

impl FromStr for Locator {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ReportError::InvalidLocator {
            locator: s.to_string(),
            reason: reason.to_string(),
        };

        let (fetcher, rest) = s
            .split_once('+')
            .ok_or_else(|| invalid("missing '+' between fetcher and package"))?;
        // Packages never contain '$'; revisions may
        let (package, revision) = rest
            .split_once('$')
            .ok_or_else(|| invalid("missing '$' between package and revision"))?;

        if fetcher.is_empty() {
            return Err(invalid("fetcher is empty"));
        }
        if package.is_empty() {
            return Err(invalid("package is empty"));
        }

        Ok(Self {
            fetcher: fetcher.to_string(),
            package: package.to_string(),
            revision: revision.to_string(),
        })
    }
}

impl Serialize for Locator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
