use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the scylla-help tool.
///
/// Global flags steer the output/upload pipeline and apply to every
/// subcommand; each subcommand selects one report or check operation.
#[derive(Parser, Debug)]
#[clap(name = "scylla-help", about = "ScyllaDB help report tool")]
pub struct Args {
    /// Upload the information to the Scylla support server
    #[clap(long)]
    pub call_home: bool,

    /// Keep any by-product
    #[clap(short, long)]
    pub keep: bool,

    /// Path to an output file
    #[clap(short, long)]
    pub out_file: Option<PathBuf>,

    /// The run's UUID. If not set, a new one will be created
    #[clap(long)]
    pub uuid: Option<String>,

    /// Also print to standard output
    #[clap(long)]
    pub tee: bool,

    /// Quiet mode
    #[clap(short, long)]
    pub quiet: bool,

    /// Zip the results before sending
    #[clap(short, long)]
    pub zip: bool,

    /// Zip and encrypt the results before sending
    #[clap(short, long)]
    pub encrypt: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Available report and check operations.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Collect general system information
    System,
    /// Collect information about the scylla runtime environment
    Scylla,
    /// Check if the current running version is the latest one
    Version,
}
