use crate::notice_generation::domain::Revision;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distinct revisions carrying one license, keyed by locator string
pub type LicenseGroup = BTreeMap<String, Revision>;

/// Mapping from license id to its license group for one report run.
///
/// License ids and locators iterate in lexicographic order, so the
/// rendered notice is reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportModel {
    groups: BTreeMap<String, LicenseGroup>,
}

impl ReportModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `revision` under `license_id`, replacing any revision already
    /// recorded there for the same locator.
    pub fn insert(&mut self, license_id: &str, revision: Revision) {
        self.groups
            .entry(license_id.to_string())
            .or_default()
            .insert(revision.locator().to_string(), revision);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct license ids
    pub fn license_count(&self) -> usize {
        self.groups.len()
    }

    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, license_id: &str) -> Option<&LicenseGroup> {
        self.groups.get(license_id)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &LicenseGroup)> {
        self.groups.iter().map(|(id, group)| (id.as_str(), group))
    }

    /// Number of distinct locators across all groups
    pub fn dependency_count(&self) -> usize {
        let mut locators: Vec<&str> = self
            .groups
            .values()
            .flat_map(|group| group.keys().map(String::as_str))
            .collect();
        locators.sort_unstable();
        locators.dedup();
        locators.len()
    }
}

/// Templates see `license_id -> [revision, ...]`
impl Serialize for ReportModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (license_id, group) in &self.groups {
            let revisions: Vec<&Revision> = group.values().collect();
            map.serialize_entry(license_id, &revisions)?;
        }
        map.end()
    }
}
