use crate::notice_generation::domain::{ReportModel, Revision};

/// LicenseAggregator service grouping fetched revisions by license id
///
/// Pure business logic: no I/O, no ordering decisions beyond what
/// [`ReportModel`] imposes.
pub struct LicenseAggregator;

impl LicenseAggregator {
    /// Groups `revisions` into a report model.
    ///
    /// A revision is filed once under every license id it carries. A revision
    /// without licenses contributes nothing. A later revision for the same
    /// locator replaces the earlier one within each group.
    pub fn aggregate<I>(revisions: I) -> ReportModel
    where
        I: IntoIterator<Item = Revision>,
    {
        let mut model = ReportModel::new();
        for revision in revisions {
            for license in revision.licenses() {
                model.insert(license.license_id(), revision.clone());
            }
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice_generation::domain::{LicenseEntry, Project};

    fn revision(locator: &str, title: &str, licenses: &[&str]) -> Revision {
        Revision::new(
            locator.parse().unwrap(),
            Project::new(title.to_string(), format!("https://example.com/{}", title)),
            licenses
                .iter()
                .map(|id| LicenseEntry::new(id.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_aggregate_empty() {
        let model = LicenseAggregator::aggregate(Vec::new());
        assert!(model.is_empty());
    }

    #[test]
    fn test_aggregate_multi_licensed_example() {
        let model = LicenseAggregator::aggregate(vec![
            revision("npm+A$1", "A", &["MIT"]),
            revision("npm+B$2", "B", &["MIT"]),
            revision("npm+C$3", "C", &["Apache-2.0", "MIT"]),
        ]);

        assert_eq!(model.license_count(), 2);

        let mit: Vec<&str> = model.group("MIT").unwrap().keys().map(String::as_str).collect();
        assert_eq!(mit, vec!["npm+A$1", "npm+B$2", "npm+C$3"]);

        let apache: Vec<&str> = model
            .group("Apache-2.0")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(apache, vec!["npm+C$3"]);
    }

    #[test]
    fn test_aggregate_revision_appears_under_each_of_its_licenses_only() {
        let revisions = vec![
            revision("cargo+serde$1.0.200", "serde", &["MIT", "Apache-2.0"]),
            revision("npm+react$18.2.0", "react", &["MIT"]),
            revision("pip+certifi$2024.8.30", "certifi", &["MPL-2.0"]),
        ];
        let model = LicenseAggregator::aggregate(revisions.clone());

        for rev in &revisions {
            let key = rev.locator().to_string();
            let carried: Vec<&str> = rev.licenses().iter().map(|l| l.license_id()).collect();
            for (license_id, group) in model.groups() {
                assert_eq!(
                    group.contains_key(&key),
                    carried.contains(&license_id),
                    "{} under {}",
                    key,
                    license_id
                );
            }
        }
    }

    #[test]
    fn test_aggregate_drops_revisions_without_licenses() {
        let model = LicenseAggregator::aggregate(vec![
            revision("npm+unlicensed$0.1.0", "unlicensed", &[]),
            revision("npm+left-pad$1.3.0", "left-pad", &["WTFPL"]),
        ]);

        assert_eq!(model.license_ids().collect::<Vec<_>>(), vec!["WTFPL"]);
        assert_eq!(model.dependency_count(), 1);
    }

    #[test]
    fn test_aggregate_last_write_wins() {
        let model = LicenseAggregator::aggregate(vec![
            revision("npm+A$1", "A (stale)", &["MIT"]),
            revision("npm+A$1", "A (fresh)", &["MIT"]),
        ]);

        let group = model.group("MIT").unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group["npm+A$1"].project().title(), "A (fresh)");
    }

    #[test]
    fn test_aggregate_duplicate_license_entry_on_one_revision() {
        let model =
            LicenseAggregator::aggregate(vec![revision("npm+A$1", "A", &["MIT", "MIT"])]);
        assert_eq!(model.license_count(), 1);
        assert_eq!(model.group("MIT").unwrap().len(), 1);
    }

    #[test]
    fn test_aggregate_no_group_for_unseen_license() {
        let model = LicenseAggregator::aggregate(vec![revision("npm+A$1", "A", &["ISC"])]);
        assert!(model.group("MIT").is_none());
    }
}
