use crate::shared::error::ReportError;
use crate::shared::Result;
use serde::Deserialize;

/// Maximum length for fetcher names (security limit)
const MAX_FETCHER_LENGTH: usize = 32;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_LENGTH: usize = 512;

/// Maximum length for revisions (security limit)
const MAX_REVISION_LENGTH: usize = 256;

/// Stable identity of one dependency, as produced by the analysis step.
///
/// `fetcher` names the ecosystem (`npm`, `mvn`, `go`, `cargo`, ...),
/// `package` the package coordinate within it, and `revision` the resolved
/// version. The revision may be empty for sources that only pin a branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyId {
    fetcher: String,
    package: String,
    revision: String,
}

impl DependencyId {
    pub fn new(fetcher: String, package: String, revision: String) -> Result<Self> {
        if fetcher.is_empty() {
            return Err(validation("Dependency fetcher cannot be empty"));
        }
        if fetcher.len() > MAX_FETCHER_LENGTH {
            return Err(validation(format!(
                "Dependency fetcher is too long ({} bytes). Maximum allowed: {} bytes",
                fetcher.len(),
                MAX_FETCHER_LENGTH
            )));
        }
        // '+' and '$' are the locator separators
        if !fetcher
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(validation(format!(
                "Dependency fetcher '{}' contains invalid characters. Only ASCII alphanumeric, hyphens, and underscores are allowed.",
                fetcher
            )));
        }

        if package.is_empty() {
            return Err(validation("Dependency package name cannot be empty"));
        }
        if package.len() > MAX_PACKAGE_LENGTH {
            return Err(validation(format!(
                "Dependency package name is too long ({} bytes). Maximum allowed: {} bytes",
                package.len(),
                MAX_PACKAGE_LENGTH
            )));
        }
        if package.contains('$') {
            return Err(validation(format!(
                "Dependency package name '{}' must not contain '$'",
                package
            )));
        }

        if revision.len() > MAX_REVISION_LENGTH {
            return Err(validation(format!(
                "Dependency revision is too long ({} bytes). Maximum allowed: {} bytes",
                revision.len(),
                MAX_REVISION_LENGTH
            )));
        }

        if package.chars().chain(revision.chars()).any(char::is_control) {
            return Err(validation(
                "Dependency identity must not contain control characters",
            ));
        }

        Ok(Self {
            fetcher,
            package,
            revision,
        })
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

impl std::fmt::Display for DependencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.revision.is_empty() {
            write!(f, "{}", self.package)
        } else {
            write!(f, "{}@{}", self.package, self.revision)
        }
    }
}

/// Wire shape of a dependency inside the analysis file
#[derive(Debug, Deserialize)]
struct RawDependency {
    fetcher: String,
    package: String,
    #[serde(default)]
    revision: String,
}

impl<'de> Deserialize<'de> for DependencyId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDependency::deserialize(deserializer)?;
        DependencyId::new(raw.fetcher, raw.package, raw.revision).map_err(serde::de::Error::custom)
    }
}

/// One module produced by the analysis step, with the dependencies found in it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzedModule {
    name: String,
    #[serde(default)]
    dependencies: Vec<DependencyId>,
}

impl AnalyzedModule {
    pub fn new(name: String, dependencies: Vec<DependencyId>) -> Self {
        Self { name, dependencies }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[DependencyId] {
        &self.dependencies
    }
}

fn validation(message: impl Into<String>) -> anyhow::Error {
    ReportError::Validation {
        message: message.into(),
    }
    .into()
}
