//! sharectl - manage Samba file shares.

#![allow(dead_code)]

mod cli;
mod conf;
mod logger;
mod ui;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Some(Commands::Add {
            name,
            path,
            comment,
            writeable,
        }) => cli::add::add_share(&cli, name, path, comment.as_deref(), *writeable),
        Some(Commands::Del { name }) => cli::del::delete_share(&cli, name),
        None => cli::interactive::run(&cli),
    }
}
