use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Alumina CLI - inspect, validate and normalize HyperChem HIN molecule files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tolerate unknown commands, bond count and endmol id mismatches, unclosed
    /// molecules and bonds to missing atoms
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Set the number of threads used when processing several files.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary row for every molecule in the given files.
    Inspect(InspectArgs),
    /// Parse a file and write it back in normalized form.
    Convert(ConvertArgs),
    /// Check that files parse, reporting every failure with its line number.
    Validate(ValidateArgs),
    /// Canonicalize orbital descriptions such as '2p' or '3 1'.
    Orbital(OrbitalArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// HIN files to inspect.
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input HIN file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output HIN file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Write atoms sorted by id instead of input order, overriding the config file.
    #[arg(long)]
    pub sort_atoms: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// HIN files to validate.
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for the `orbital` subcommand.
#[derive(Args, Debug)]
pub struct OrbitalArgs {
    /// Orbital descriptions, e.g. '1s', '2p', '4 3'.
    #[arg(required = true, value_name = "ORBITAL")]
    pub orbitals: Vec<String>,
}
