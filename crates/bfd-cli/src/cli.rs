//! CLI argument definitions.

use std::path::PathBuf;

use bfd_model::RecordType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bfd-map",
    version,
    about = "Inspect and exercise claims field-value specifications",
    long_about = "Validate a field-value specification, list the functions it may\n\
                  reference, and map a JSON person fixture for one record type."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a specification and report unusable cells.
    Validate(ResourceArgs),

    /// List the functions a specification cell may reference.
    Functions,

    /// Map a JSON fixture for one record type and print the values.
    Map(MapArgs),
}

/// Where the specification and carrier table come from.
#[derive(Args)]
pub struct ResourceArgs {
    /// Exporter config (TOML) naming the resources.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Field-value specification (TSV); overrides the config.
    #[arg(long = "spec", value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Carrier table (CSV); overrides the config.
    #[arg(long = "carriers", value_name = "PATH")]
    pub carriers: Option<PathBuf>,
}

#[derive(Args)]
pub struct MapArgs {
    /// JSON fixture with a person and optional encounter and device.
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Record type to map.
    #[arg(long = "record-type", short = 't', value_enum)]
    pub record_type: RecordTypeArg,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Always take the first alternative of a distribution.
    #[arg(long = "use-first")]
    pub use_first: bool,

    /// Seed for distribution draws (default: config seed, then person seed).
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Also list fields that received no value.
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordTypeArg {
    Beneficiary,
    BeneficiaryHistory,
    Carrier,
    Dme,
    Inpatient,
    Outpatient,
    Prescription,
}

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Beneficiary => RecordType::Beneficiary,
            RecordTypeArg::BeneficiaryHistory => RecordType::BeneficiaryHistory,
            RecordTypeArg::Carrier => RecordType::Carrier,
            RecordTypeArg::Dme => RecordType::Dme,
            RecordTypeArg::Inpatient => RecordType::Inpatient,
            RecordTypeArg::Outpatient => RecordType::Outpatient,
            RecordTypeArg::Prescription => RecordType::Prescription,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
