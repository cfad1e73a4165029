//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use bored_core::{ApiConfig, FlagValues, DEFAULT_BASE_URL};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Get a random idea of what to do when you are bored
///
/// Asks the bored API (https://www.boredapi.com/) for an activity suggestion,
/// optionally narrowed down by accessibility, type, participants and price.
#[derive(Parser, Debug)]
#[command(name = "boredcli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Endpoint of the bored API
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_BASE_URL, value_parser = parse_base_url)]
    pub base_url: ApiConfig,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a random idea
    ///
    /// Fetches a random idea of what to do when you get bored.
    Bored(BoredArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the bored command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct BoredArgs {
    /// Exact accessibility factor, 0.0 (most accessible) - 1.0; -1 for random.
    /// Not meant to be combined with --access-min/--access-max
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub accessibility: f64,

    /// Minimum accessibility factor, 0.0 - 1.0
    #[arg(long = "access-min", default_value_t = 0.0, allow_negative_numbers = true)]
    pub access_min: f64,

    /// Maximum accessibility factor, 0.0 - 1.0
    #[arg(long = "access-max", default_value_t = 1.0, allow_negative_numbers = true)]
    pub access_max: f64,

    /// Type of the activity: education, recreational, social, diy, charity,
    /// cooking, relaxation, music, busywork
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub kind: String,

    /// Number of people the activity involves (>= 0); -1 for random
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub participants: i64,

    /// Exact price factor, 0.0 (free) - 1.0; -1 for random.
    /// Not meant to be combined with --minprice/--maxprice
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub price: f64,

    /// Minimum price factor, 0.0 - 1.0
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub minprice: f64,

    /// Maximum price factor, 0.0 - 1.0
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub maxprice: f64,
}

impl BoredArgs {
    /// Raw flag values, sentinels included, ready for validation.
    pub fn flag_values(&self) -> FlagValues {
        FlagValues {
            accessibility: self.accessibility,
            access_min: self.access_min,
            access_max: self.access_max,
            category: self.kind.clone(),
            participants: self.participants,
            price: self.price,
            price_min: self.minprice,
            price_max: self.maxprice,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable `name = value` lines
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
}

fn parse_base_url(input: &str) -> Result<ApiConfig, String> {
    ApiConfig::new(input).map_err(|err| err.to_string())
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
