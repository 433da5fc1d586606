//! `add` command: append a share definition to the config file.

use super::{Cli, persist};
use crate::conf::SmbConf;
use crate::log;
use anyhow::Result;

pub fn add_share(
    cli: &Cli,
    name: &str,
    path: &str,
    comment: Option<&str>,
    writeable: bool,
) -> Result<()> {
    let mut conf = SmbConf::load(&cli.conf)?;
    conf.add_section(name, path, comment, writeable);
    persist(&mut conf, cli.stdout)?;
    if !cli.stdout {
        log!("share"; "added share `{}` exporting {}", name, path);
    }
    Ok(())
}
