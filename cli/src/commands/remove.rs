use hostsctl_common::{config::Config, success, warn};

use crate::commands;

pub fn remove(domain: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut hosts = commands::load(cfg)?;

    if !hosts.remove_domain(domain) {
        warn!("Domain '{}' not found in {}. No changes made.", domain.trim(), cfg.hosts_file.display());
        return Ok(());
    }

    commands::commit(&hosts, cfg)?;
    success!("Removed domain '{}' from {}", domain.trim(), cfg.hosts_file.display());
    Ok(())
}
