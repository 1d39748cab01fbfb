use crate::notice_generation::domain::{LicenseEntry, Locator, Project, Revision};
use crate::ports::outbound::RevisionFetcher;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

/// Default license metadata service
pub const DEFAULT_ENDPOINT: &str = "https://app.fossa.com";

/// Locators per bulk request; keeps query strings well under URL limits
const BULK_CHUNK_SIZE: usize = 50;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RevisionDto {
    locator: String,
    #[serde(default)]
    project: Option<ProjectDto>,
    #[serde(default)]
    licenses: Vec<LicenseDto>,
}

#[derive(Debug, Deserialize)]
struct ProjectDto {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseDto {
    license_id: String,
}

impl RevisionDto {
    fn into_revision(self) -> Result<Revision> {
        let locator: Locator = self
            .locator
            .parse()
            .with_context(|| "Revision service returned an unusable locator")?;

        let (title, url) = match self.project {
            Some(project) => (project.title, project.url),
            None => (None, None),
        };
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| locator.package().to_string());
        let project = Project::new(title, url.unwrap_or_default());

        let licenses = self
            .licenses
            .into_iter()
            .map(|l| LicenseEntry::new(l.license_id))
            .collect();

        Ok(Revision::new(locator, project, licenses))
    }
}

/// FossaRevisionClient adapter resolving locators through the revisions API
///
/// Blocking and strictly sequential: one request at a time on the calling
/// thread, no retries. Timeouts are the client's 10 second request limit.
pub struct FossaRevisionClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl FossaRevisionClient {
    /// Creates a client for `endpoint` (e.g. `https://app.fossa.com`)
    pub fn new(endpoint: &str, api_key: Option<String>) -> Result<Self> {
        Self::with_builder(endpoint, api_key, reqwest::blocking::Client::builder())
    }

    fn with_builder(
        endpoint: &str,
        api_key: Option<String>,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self> {
        let endpoint = Self::normalize_endpoint(endpoint)?;
        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let client = builder
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn normalize_endpoint(endpoint: &str) -> Result<String> {
        let trimmed = endpoint.trim().trim_end_matches('/');
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            anyhow::bail!(
                "Invalid endpoint '{}': expected an http:// or https:// URL",
                endpoint
            );
        }
        Ok(trimmed.to_string())
    }

    fn revision_url(&self, locator: &Locator) -> String {
        format!(
            "{}/api/revisions/{}",
            self.endpoint,
            urlencoding::encode(&locator.to_string())
        )
    }

    fn revisions_url(&self, locators: &[Locator]) -> String {
        let query = locators
            .iter()
            .map(|l| format!("locator={}", urlencoding::encode(&l.to_string())))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/api/revisions?{}", self.endpoint, query)
    }

    fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Revision service returned status code {}", status);
        }

        Ok(response.json()?)
    }
}

impl RevisionFetcher for FossaRevisionClient {
    fn fetch_one(&self, locator: &Locator) -> Result<Revision> {
        let dto: RevisionDto = self
            .get(&self.revision_url(locator))
            .with_context(|| format!("Failed to fetch revision {}", locator))?;
        dto.into_revision()
    }

    fn fetch_many(&self, locators: &[Locator]) -> Result<Vec<Revision>> {
        let mut revisions = Vec::with_capacity(locators.len());
        for chunk in locators.chunks(BULK_CHUNK_SIZE) {
            let dtos: Vec<RevisionDto> = self
                .get(&self.revisions_url(chunk))
                .with_context(|| format!("Failed to fetch {} revision(s)", chunk.len()))?;
            for dto in dtos {
                // One malformed entry does not invalidate the rest of the answer
                match dto.into_revision() {
                    Ok(revision) => revisions.push(revision),
                    Err(e) => tracing::warn!(error = %format!("{:#}", e), "skipping revision"),
                }
            }
        }
        Ok(revisions)
    }
}
