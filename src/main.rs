mod cli;

use cli::Args;
use license_notice::adapters::outbound::console::StderrProgressReporter;
use license_notice::adapters::outbound::filesystem::AnalysisFileReader;
use license_notice::adapters::outbound::network::FossaRevisionClient;
use license_notice::application::dto::LicensesRequest;
use license_notice::application::factories::{
    PresenterFactory, PresenterType, RendererFactory, TemplateSource,
};
use license_notice::application::use_cases::GenerateLicensesReportUseCase;
use license_notice::config::{self, ConfigFile, Settings};
use license_notice::notice_generation::domain::NoticeMetadata;
use license_notice::ports::outbound::ProgressReporter;
use license_notice::shared::error::ExitCode;
use license_notice::shared::Result;
use std::path::Path;
use std::process;

const LOG_ENV: &str = "LICENSE_NOTICE_LOG";

fn main() {
    let args = Args::parse_args();

    if let Err(e) = init_tracing(args.log_level()) {
        eprintln!("⚠️  Warning: {}", e);
    }

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn run(args: Args) -> Result<()> {
    let file_config = load_config(&args)?;
    let settings = Settings::resolve(args.overrides(), file_config);
    tracing::debug!(?settings, "resolved settings");

    let progress_reporter = StderrProgressReporter::new().quiet(args.quiet);

    // Compile the template before any license data is fetched
    let template_source = TemplateSource::from_option(settings.template.clone());
    progress_reporter.report(&RendererFactory::progress_message(&template_source));
    let renderer = RendererFactory::create(template_source, NoticeMetadata::current())?;

    // Create adapters (Dependency Injection)
    let dependency_source = AnalysisFileReader::new(settings.analysis.clone());
    let revision_fetcher = FossaRevisionClient::new(&settings.endpoint, args.api_key.clone())?;

    let use_case = GenerateLicensesReportUseCase::new(
        dependency_source,
        revision_fetcher,
        renderer,
        progress_reporter,
    );

    let response = use_case.execute(LicensesRequest::new(settings.fetch_mode))?;
    if response.is_partial() {
        tracing::warn!(
            skipped = response.skipped.len(),
            "notice generated without some dependencies"
        );
    }

    let presenter = PresenterFactory::create(PresenterType::from_option(settings.output));
    presenter.present(&response.content)?;

    Ok(())
}
