/// Integration tests for the application layer
mod test_utilities;

use license_notice::shared::error::ReportError;
use test_utilities::mocks::*;
use license_notice::prelude::*;

const RULE: &str = "========================================================================";

fn metadata() -> NoticeMetadata {
    NoticeMetadata::new(
        "license-notice".to_string(),
        "https://example.com/license-notice".to_string(),
    )
}

fn sample_source() -> MockDependencySource {
    MockDependencySource::new()
        .with_module(
            "frontend",
            &[("npm", "react", "18.2.0"), ("npm", "left-pad", "1.3.0")],
        )
        .with_module(
            "backend",
            &[("cargo", "serde", "1.0.200"), ("npm", "react", "18.2.0")],
        )
}

fn sample_fetcher() -> MockRevisionFetcher {
    MockRevisionFetcher::new()
        .with_revision("npm+react$18.2.0", "react", "https://react.dev", &["MIT"])
        .with_revision(
            "npm+left-pad$1.3.0",
            "left-pad",
            "https://github.com/left-pad/left-pad",
            &["WTFPL"],
        )
        .with_revision(
            "cargo+serde$1.0.200",
            "serde",
            "https://serde.rs",
            &["MIT", "Apache-2.0"],
        )
}

#[test]
fn test_generate_notice_happy_path_bulk() {
    let fetcher = sample_fetcher();
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateLicensesReportUseCase::new(
        sample_source(),
        fetcher.clone(),
        TemplateRenderer::builtin(metadata()).unwrap(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(LicensesRequest::default()).unwrap();

    // One bulk call over the de-duplicated union, in first-seen order
    assert_eq!(
        fetcher.fetch_many_calls(),
        vec![vec![
            "npm+react$18.2.0".to_string(),
            "npm+left-pad$1.3.0".to_string(),
            "cargo+serde$1.0.200".to_string(),
        ]]
    );
    assert!(fetcher.fetch_one_calls().is_empty());

    let ids: Vec<&str> = response.report_model.license_ids().collect();
    assert_eq!(ids, vec!["Apache-2.0", "MIT", "WTFPL"]);
    assert_eq!(response.report_model.dependency_count(), 3);
    assert_eq!(response.fetched_count, 3);

    let content = &response.content;
    assert!(content.starts_with("# 3rd-Party Software License Notice\n"));
    assert_eq!(content.matches(RULE).count(), 6);
    assert_eq!(content.matches("- serde (from https://serde.rs)").count(), 2);
    assert!(content.contains("- react (from https://react.dev)"));

    let apache = content.find("\nApache-2.0\n").unwrap();
    let mit = content.find("\nMIT\n").unwrap();
    let wtfpl = content.find("\nWTFPL\n").unwrap();
    assert!(apache < mit && mit < wtfpl);

    assert!(progress_reporter
        .get_messages()
        .contains(&"Progress: 0/3 - Fetching license info".to_string()));
    assert_eq!(progress_reporter.messages_starting_with("Finished").len(), 1);
}

#[test]
fn test_exhaustive_mode_skips_unresolvable_dependency() {
    let fetcher = sample_fetcher().with_failure("npm+left-pad$1.3.0");
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateLicensesReportUseCase::new(
        sample_source(),
        fetcher.clone(),
        TemplateRenderer::builtin(metadata()).unwrap(),
        progress_reporter.clone(),
    );

    let response = use_case
        .execute(LicensesRequest::new(FetchMode::Exhaustive))
        .unwrap();

    assert_eq!(fetcher.fetch_one_calls().len(), 3);
    assert!(fetcher.fetch_many_calls().is_empty());

    assert!(response.is_partial());
    assert!(response.report_model.group("WTFPL").is_none());
    assert!(!response.content.contains("left-pad"));
    assert!(response.content.contains("- react (from https://react.dev)"));

    let errors = progress_reporter.messages_starting_with("Error:");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("left-pad@1.3.0"));

    let progress = progress_reporter.messages_starting_with("Progress:");
    assert_eq!(
        progress,
        vec![
            "Progress: 1/3 - Fetching license info (1/3): react",
            "Progress: 2/3 - Fetching license info (2/3): left-pad",
            "Progress: 3/3 - Fetching license info (3/3): serde",
        ]
    );
}

#[test]
fn test_bulk_failure_produces_no_report() {
    let fetcher = sample_fetcher().with_bulk_error("401 Unauthorized");
    let progress_reporter = MockProgressReporter::new();

    let use_case = GenerateLicensesReportUseCase::new(
        sample_source(),
        fetcher.clone(),
        TemplateRenderer::builtin(metadata()).unwrap(),
        progress_reporter.clone(),
    );

    let err = use_case.execute(LicensesRequest::default()).unwrap_err();

    match err.downcast_ref::<ReportError>() {
        Some(ReportError::BulkFetch { count, details }) => {
            assert_eq!(*count, 3);
            assert!(details.contains("401 Unauthorized"));
        }
        other => panic!("expected BulkFetch, got {:?}", other),
    }
    assert_eq!(fetcher.fetch_many_calls().len(), 1);
    assert!(progress_reporter.messages_starting_with("Completed:").is_empty());
    assert_eq!(progress_reporter.messages_starting_with("Finished").len(), 1);
}

#[test]
fn test_dependency_source_failure_is_fatal() {
    let fetcher = sample_fetcher();
    let use_case = GenerateLicensesReportUseCase::new(
        MockDependencySource::failing("Analysis file not found"),
        fetcher.clone(),
        TemplateRenderer::builtin(metadata()).unwrap(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(LicensesRequest::default()).unwrap_err();
    assert!(err.to_string().contains("Analysis file not found"));
    assert_eq!(fetcher.total_calls(), 0);
}

#[test]
fn test_empty_analysis_makes_no_requests() {
    let fetcher = MockRevisionFetcher::new().with_bulk_error("must not be called");

    for mode in [FetchMode::Bulk, FetchMode::Exhaustive] {
        let use_case = GenerateLicensesReportUseCase::new(
            MockDependencySource::new().with_module("empty", &[]),
            fetcher.clone(),
            TemplateRenderer::builtin(metadata()).unwrap(),
            MockProgressReporter::new(),
        );

        let response = use_case.execute(LicensesRequest::new(mode)).unwrap();
        assert!(response.report_model.is_empty());
        assert!(!response.content.contains(RULE));
        assert!(response
            .content
            .ends_with("This software includes the following software and licenses:\n\n"));
    }

    assert_eq!(fetcher.total_calls(), 0);
}

#[test]
fn test_custom_template_sees_full_model() {
    let template = "{% for license_id, revisions in licenses|items %}\
{{ license_id }} ({{ revisions|length }}):{% for r in revisions %} {{ r.project.title }}{% endfor %}\n\
{% endfor %}";
    let renderer = TemplateRenderer::from_source("summary.txt", template, metadata()).unwrap();

    let use_case = GenerateLicensesReportUseCase::new(
        sample_source(),
        sample_fetcher(),
        renderer,
        MockProgressReporter::new(),
    );

    let response = use_case.execute(LicensesRequest::default()).unwrap();

    // Revisions within a license are ordered by locator string
    assert_eq!(
        response.content,
        "Apache-2.0 (1): serde\nMIT (2): serde react\nWTFPL (1): left-pad\n"
    );
}

#[test]
fn test_revision_without_licenses_is_omitted() {
    let fetcher = MockRevisionFetcher::new()
        .with_revision("npm+a$1", "a", "https://a.example", &[])
        .with_revision("npm+b$1", "b", "https://b.example", &["ISC"]);
    let renderer = TemplateRenderer::from_source(
        "titles.txt",
        "{% for id, revisions in licenses|items %}{% for r in revisions %}{{ r.project.title }}\n{% endfor %}{% endfor %}",
        metadata(),
    )
    .unwrap();

    let use_case = GenerateLicensesReportUseCase::new(
        MockDependencySource::new().with_module("m", &[("npm", "a", "1"), ("npm", "b", "1")]),
        fetcher,
        renderer,
        MockProgressReporter::new(),
    );

    let response = use_case.execute(LicensesRequest::default()).unwrap();
    assert_eq!(response.fetched_count, 2);
    assert_eq!(response.content, "b\n");
}
