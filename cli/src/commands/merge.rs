use hostsctl_common::{config::Config, info, success};

use crate::commands;

pub fn merge(cfg: &Config) -> anyhow::Result<()> {
    let mut hosts = commands::load(cfg)?;
    let before: usize = hosts.entries().count();

    if !hosts.merge_by_ip() {
        info!("Every IP already has a single line in {}", cfg.hosts_file.display());
        return Ok(());
    }

    commands::commit(&hosts, cfg)?;

    let merged: usize = before - hosts.entries().count();
    let unit: &str = if merged == 1 { "line was" } else { "lines were" };
    success!("{merged} duplicate {unit} merged in {}", cfg.hosts_file.display());
    Ok(())
}
