use colored::*;
use hostsctl_common::{config::Config, info, success};
use hostsctl_core::HostLine;

use crate::commands;
use crate::terminal::{format, print};

pub fn add(ip: &str, domain: &str, comment: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let mut hosts = commands::load(cfg)?;
    let domain = domain.trim();
    let appends_after_blank: bool = hosts.entry_for_ip(ip).is_none()
        && hosts.lines().last().is_some_and(HostLine::is_blank);

    if !hosts.add_domain(ip, domain, comment)? {
        info!("No changes needed for domain '{domain}' with IP {ip}");
        return Ok(());
    }

    commands::commit(&hosts, cfg)?;

    if cfg.quiet == 0 {
        print::header("entry updated", cfg.quiet);
        print::aligned_line("Domain", domain.bold());
        print::aligned_line("IP", format::colored_ip(ip));
        if let Some(line) = hosts.entry_for_domain(domain) {
            print::aligned_line("Line", line.to_string());
        }
    }
    if appends_after_blank {
        info!("New line for {ip} follows the trailing blank line; the file no longer ends with a newline");
    }
    success!("Added/updated domain '{domain}' for IP {ip} in {}", cfg.hosts_file.display());
    Ok(())
}
