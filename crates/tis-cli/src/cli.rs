//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "tis", version, about = "Tabular import studio")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormatArg::Compact)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate an uploaded file against a template.
    Validate(ValidateArgs),
    /// Strip out-of-alphabet characters from text columns.
    Clean(CleanArgs),
    /// Normalize free-text country names to the canonical list.
    NormalizeCountries(NormalizeCountriesArgs),
    /// List the registered templates and their rules.
    Templates,
}

#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Input file (.csv or .xlsx).
    #[arg(long)]
    pub input: PathBuf,

    /// Worksheet name for XLSX input; defaults to the first sheet.
    #[arg(long)]
    pub sheet: Option<String>,

    /// Registered template name, e.g. "Customer Template".
    #[arg(long)]
    pub template: String,

    /// JSON column-mapping file: an array of {"field", "source"} bindings.
    /// Without a mapping the input columns are taken as already mapped.
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Write the validation report as JSON to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Export the mapped table as CSV to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct CleanArgs {
    /// Input file (.csv or .xlsx).
    #[arg(long)]
    pub input: PathBuf,

    /// Worksheet name for XLSX input; defaults to the first sheet.
    #[arg(long)]
    pub sheet: Option<String>,

    /// Columns to clean.
    #[arg(long, value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Allowed-character set.
    #[arg(long, value_enum, default_value_t = LanguageArg::English)]
    pub language: LanguageArg,

    /// Output CSV path.
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    English,
    Arabic,
}

#[derive(Debug, clap::Args)]
pub struct NormalizeCountriesArgs {
    /// Input file (.csv or .xlsx).
    #[arg(long)]
    pub input: PathBuf,

    /// Worksheet name for XLSX input; defaults to the first sheet.
    #[arg(long)]
    pub sheet: Option<String>,

    /// Country column to normalize.
    #[arg(long)]
    pub column: String,

    /// Output CSV path.
    #[arg(long)]
    pub output: PathBuf,
}
