//! Command-line interface module.

mod args;
pub mod add;
pub mod del;
pub mod interactive;

pub use args::{Cli, Commands};

use crate::conf::SmbConf;
use anyhow::Result;
use std::io;

/// Write the mutated document to stdout or back to its file.
pub(crate) fn persist(conf: &mut SmbConf, to_stdout: bool) -> Result<()> {
    if to_stdout {
        conf.write_to(io::stdout().lock())?;
    } else {
        conf.save()?;
    }
    Ok(())
}
