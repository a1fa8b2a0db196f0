use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{decode, solve};
use anyhow::Result;
use clap::{command, ArgAction, Parser, Subcommand, ValueEnum};
use sss_config::{load_config, CliOverrides, OutputFormat, RecoveryConfig};
use sss_shares::ShareCountPolicy;
use sss_solver::AcceptancePolicy;
use tracing::{instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "sss-recover")]
#[command(version)]
#[command(about = "Recover a secret from Shamir shares, tolerating corrupted shares", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sss-recover -vvv` will give
    /// you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Fail when the declared share count does not match the shares present
    #[arg(long, global = true)]
    pub strict: bool,

    /// Accept a subset even if up to this many other shares do not fit it
    #[arg(long, global = true)]
    pub max_faults: Option<usize>,

    /// Give up on a share set after this many milliseconds
    #[arg(long, global = true)]
    pub deadline_ms: Option<u64>,

    /// Report format
    #[arg(short, long, global = true)]
    pub output: Option<Format>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Json => OutputFormat::Json,
            Format::Text => OutputFormat::Text,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        match &self.command {
            Commands::Solve { files } => {
                let config = self.load_config()?;
                solve::execute(&config, files)?
            }
            Commands::Decode { digits, base } => decode::execute(digits, *base)?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<RecoveryConfig> {
        load_config(self.config.as_deref(), self.overrides())
    }

    /// Flags given on the command line. Anything not given is left to the config file and env.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            share_count: self.strict.then_some(ShareCountPolicy::Strict),
            acceptance: self
                .max_faults
                .map(|max_faults| AcceptancePolicy::FaultBudget { max_faults }),
            deadline_ms: self.deadline_ms,
            output: self.output.map(Into::into),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recover the secret from one or more share files
    Solve {
        /// JSON share files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Decode a digit string in the given base and print it in decimal
    Decode {
        /// Digits, case-insensitive
        digits: String,

        /// Base between 2 and 36
        #[arg(long, short)]
        base: u32,
    },
}
