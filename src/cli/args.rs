//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Samba share management CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Samba config file to edit
    #[arg(short = 'f', long, global = true, default_value = "/etc/samba/smb.conf", value_hint = clap::ValueHint::FilePath)]
    pub conf: PathBuf,

    /// Write the result to stdout instead of the config file
    #[arg(short = 's', long, global = true)]
    pub stdout: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Subcommand; omit it for the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a share definition
    Add {
        /// Name of the share
        #[arg(short, long)]
        name: String,

        /// Directory exported by the share
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        path: String,

        /// Comment of the share (defaults to the path)
        #[arg(short, long)]
        comment: Option<String>,

        /// Create a writeable share
        #[arg(short, long)]
        writeable: bool,
    },

    /// Delete a share definition
    Del {
        /// Name of the share to delete
        #[arg(short, long)]
        name: String,
    },
}
