//! CLI argument definitions for the GEM crosswalk.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use gem_map::MatchPipeline;
use gem_model::CodeFamily;
use gem_standards::{DEFAULT_RELEASE, TABLES_ENV_VAR};

#[derive(Parser)]
#[command(
    name = "gem-crosswalk",
    version,
    about = "ICD-9 / ICD-10 crosswalk using CMS General Equivalence Mappings",
    long_about = "Map ICD-9 codes to ICD-10 (and back) using the CMS GEM tables.\n\n\
                  Supports forward, forward-backward and secondary (shared target)\n\
                  matching for diagnosis (cm) and procedure (pcs) codes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub tables: TableArgs,

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

/// Where the four GEM tables come from.
#[derive(Args)]
pub struct TableArgs {
    /// Directory holding the GEM tables (default: gem_files/<RELEASE>).
    #[arg(long = "tables-dir", value_name = "DIR", env = TABLES_ENV_VAR, global = true)]
    pub tables_dir: Option<PathBuf>,

    /// GEM release year used in table file names.
    #[arg(long = "release", default_value = DEFAULT_RELEASE, global = true)]
    pub release: String,

    /// TOML manifest naming each table explicitly (takes precedence over --tables-dir).
    #[arg(long = "manifest", value_name = "FILE", global = true)]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every code list file under one or more roots to CSV tables.
    Batch(BatchArgs),

    /// Map codes given on the command line.
    Query(QueryArgs),

    /// Show every table row that mentions a code.
    Lookup(LookupArgs),

    /// Summarize the loaded GEM tables.
    Tables,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Root folders to walk (default: ICD-9-cm_source as cm, ICD-9-pcs_source as pcs).
    #[arg(value_name = "ROOT", requires = "mode")]
    pub roots: Vec<PathBuf>,

    /// Code family for the given roots: cm or pcs.
    ///
    /// Any other value is accepted and produces empty result tables.
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<String>,

    /// Output directory for result tables.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Matching pipeline to run for each file.
    #[arg(long = "pipeline", value_enum, default_value = "forward")]
    pub pipeline: PipelineArg,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Codes to map.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Code family to query.
    #[arg(long = "mode", value_enum)]
    pub mode: FamilyArg,

    /// Matching pipeline.
    #[arg(long = "pipeline", value_enum, default_value = "secondary")]
    pub pipeline: PipelineArg,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Code to look up in all four indexes.
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Code family to inspect.
    #[arg(long = "mode", value_enum)]
    pub mode: FamilyArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Cm,
    Pcs,
}

impl From<FamilyArg> for CodeFamily {
    fn from(value: FamilyArg) -> Self {
        match value {
            FamilyArg::Cm => CodeFamily::Cm,
            FamilyArg::Pcs => CodeFamily::Pcs,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PipelineArg {
    /// Forward table only.
    Forward,
    /// Forward and backward tables.
    Fwb,
    /// Forward-backward plus one round of shared-target expansion.
    Secondary,
}

impl From<PipelineArg> for MatchPipeline {
    fn from(value: PipelineArg) -> Self {
        match value {
            PipelineArg::Forward => MatchPipeline::Forward,
            PipelineArg::Fwb => MatchPipeline::ForwardBackward,
            PipelineArg::Secondary => MatchPipeline::Secondary,
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
