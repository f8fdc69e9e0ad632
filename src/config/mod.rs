pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;

/// CLI configuration. The defaults reproduce the original daily job exactly:
/// fetch the finished-matches feed and overwrite `index.html` at the
/// repository root, so the scheduled workflow can invoke the binary with no
/// flags at all.
#[derive(Debug, Clone, Parser)]
#[command(name = "matchday-etl")]
#[command(about = "Generates a blog page of team stats from finished match results")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "https://raw.githubusercontent.com/JOSPHATT/Finished_Matches/refs/heads/main/Finished_matches.csv"
    )]
    pub csv_url: String,

    #[arg(long, default_value = "templates/blog.html")]
    pub template_path: String,

    #[arg(long, default_value = "index.html")]
    pub output_path: String,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-stage system stats")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn csv_url(&self) -> &str {
        &self.csv_url
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_url("csv_url", &self.csv_url)?;
        validation::validate_path("template_path", &self.template_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
