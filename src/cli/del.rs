//! `del` command: remove a share definition from the config file.

use super::{Cli, persist};
use crate::conf::SmbConf;
use crate::log;
use anyhow::{Context, Result};

pub fn delete_share(cli: &Cli, name: &str) -> Result<()> {
    let mut conf = SmbConf::load(&cli.conf)?;
    conf.delete_section(name)
        .with_context(|| format!("cannot delete share from {}", cli.conf.display()))?;
    persist(&mut conf, cli.stdout)?;
    if !cli.stdout {
        log!("share"; "deleted share `{}`", name);
    }
    Ok(())
}
