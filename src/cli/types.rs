//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{list::ListArgs, probe::ProbeArgs, show::ShowArgs, trust::TrustArgs};

#[derive(Parser, Debug)]
#[command(name = "cloudtrust")]
#[command(about = "Inspect clouds.yaml credentials and their TLS trust policy", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to clouds.yaml (overrides OS_CLIENT_CONFIG_FILE and the search path)
    #[arg(short = 'f', long, global = true)]
    pub clouds_file: Option<PathBuf>,

    /// Path to a cloudtrust settings file
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List clouds defined in the document
    List(ListArgs),

    /// Show a cloud's settings with secrets redacted
    Show(ShowArgs),

    /// Resolve the TLS trust policy for a cloud
    Trust(TrustArgs),

    /// Connect to a cloud's auth URL using its trust policy
    Probe(ProbeArgs),
}
