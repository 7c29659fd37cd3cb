use chemjson::core::codec::FloatPrecision;
use chemjson::workflows::convert::HydrogenMode;
use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "chemjson - Interconverts molecular structures between the neutral JSON representation and native chemical file formats.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Chemical input data: a file path if one exists, otherwise a literal string.
    pub input: String,

    /// Input format name ("json" for the neutral form, otherwise an engine
    /// format such as "smi", "mol", or "cif").
    pub input_format: String,

    /// Output format name ("json" for the neutral form).
    pub output_format: String,

    #[command(flatten)]
    pub hydrogens: HydrogenFlags,

    /// Emit compact machine-oriented JSON instead of the pretty layout.
    #[arg(long)]
    pub compact: bool,

    /// Decimal digits kept for coordinates in JSON output.
    #[arg(long, value_name = "3|6", default_value = "3")]
    pub precision: FloatPrecision,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// A group to handle the mutually exclusive hydrogen flags.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct HydrogenFlags {
    /// Saturate open valences with explicit hydrogens before output.
    #[arg(long)]
    pub add_hydrogens: bool,

    /// Strip explicit hydrogens before output.
    #[arg(long)]
    pub remove_hydrogens: bool,
}

impl HydrogenFlags {
    pub fn mode(self) -> HydrogenMode {
        if self.add_hydrogens {
            HydrogenMode::Add
        } else if self.remove_hydrogens {
            HydrogenMode::Remove
        } else {
            HydrogenMode::Keep
        }
    }
}
