use colored::*;
use hostsctl_common::config::Config;
use hostsctl_core::HostLine;

use crate::commands;
use crate::mprint;
use crate::terminal::{colors, format, print};

pub fn list(json: bool, pretty: bool, cfg: &Config) -> anyhow::Result<()> {
    let hosts = commands::load(cfg)?;

    if json {
        print::print(&hosts.to_json(pretty)?);
        return Ok(());
    }

    let entries: Vec<&HostLine> = hosts.entries().collect();

    print::header("hosts entries", cfg.quiet);
    if entries.is_empty() {
        print::no_results();
        return Ok(());
    }

    for (idx, line) in entries.iter().enumerate() {
        match cfg.quiet {
            0 => print_entry_tree(idx, line),
            _ => {
                mprint!(&line.to_string());
            }
        }
        if cfg.quiet == 0 && idx + 1 != entries.len() {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        print_summary(&entries, cfg);
    }
    Ok(())
}

fn print_entry_tree(idx: usize, line: &HostLine) {
    let Some(ip) = line.ip() else {
        return;
    };
    print::tree_head(idx, format::ip_heading(ip));

    let mut items: Vec<ColoredString> = line
        .domains()
        .iter()
        .map(|domain| domain.as_str().color(colors::PRIMARY))
        .collect();

    let comment: &str = line.comment.trim();
    if !comment.is_empty() {
        items.push(format!("# {comment}").color(colors::COMMENT).italic());
    }

    print::as_tree_one_level(&items);
}

fn print_summary(entries: &[&HostLine], cfg: &Config) {
    let domain_count: usize = entries.iter().map(|line| line.domains().len()).sum();
    let ips: ColoredString = format!("{} addresses", entries.len()).bold().green();
    let domains: ColoredString = format!("{domain_count} domains").bold().yellow();
    let output: String = format!("{ips} mapping {domains} in {}", cfg.hosts_file.display());

    print::fat_separator();
    print::centerln(&output);
}
