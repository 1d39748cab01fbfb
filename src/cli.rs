use clap::Parser;
use license_notice::config::ConfigOverrides;
use std::path::PathBuf;

/// Generate a third-party license notice from analyzed dependencies
#[derive(Parser, Debug)]
#[command(name = "license-notice")]
#[command(version)]
#[command(
    about = "Generate a third-party license notice from analyzed dependencies",
    long_about = None
)]
pub struct Args {
    /// Analysis output listing modules and their dependencies (JSON)
    /// [default: .license-notice/analysis.json]
    #[arg(short, long, value_name = "FILE")]
    pub analysis: Option<PathBuf>,

    /// Fetch each dependency individually and skip the ones that cannot be resolved
    #[arg(long, visible_alias = "unknown")]
    pub include_unknown: bool,

    /// Template file used instead of the built-in notice template
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Base URL of the license metadata service [default: https://app.fossa.com]
    #[arg(long, value_name = "URL", env = "LICENSE_NOTICE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// API key sent as a bearer token to the license metadata service
    #[arg(long, value_name = "KEY", env = "LICENSE_NOTICE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Config file (defaults to ./license-notice.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            include_unknown: self.include_unknown,
            template: self.template.clone(),
            output: self.output.clone(),
            analysis: self.analysis.clone(),
        }
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
