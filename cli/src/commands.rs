pub mod add;
pub mod list;
pub mod merge;
pub mod remove;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use hostsctl_common::config::{Config, DEFAULT_HOSTS_FILE};
use hostsctl_common::warn;
use hostsctl_core::{HostsFile, storage};

use crate::terminal::print;

#[derive(Parser)]
#[command(name = "hostsctl")]
#[command(about = "Manage IP-to-hostname mappings in a hosts file.")]
#[command(long_about = "Manage IP-to-hostname mappings in a hosts file.\n\n\
Lines the tool does not touch are written back as they were.\n\
Modifying the system hosts file usually requires administrator privileges.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the hosts file
    #[arg(short, long, global = true, default_value = DEFAULT_HOSTS_FILE)]
    pub file: PathBuf,

    /// Less output; repeat to show errors only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print the resulting file instead of writing it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all IP-to-domain mappings as a tree
    #[command(alias = "l")]
    List {
        /// Print the parsed model as JSON
        #[arg(long)]
        json: bool,
        /// Indent the JSON output
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Add a domain to an IP, moving it away from any other IP
    #[command(alias = "a")]
    Add {
        ip: String,
        domain: String,
        /// Comment for the entry
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Remove a domain; lines left without domains are deleted
    #[command(alias = "rm")]
    Remove { domain: String },
    /// Merge lines that share the same IP into the first of them
    #[command(alias = "m")]
    Merge,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            hosts_file: self.file.clone(),
            quiet: self.quiet,
            dry_run: self.dry_run,
        }
    }
}

/// Writes the edited file, or prints it on a dry run.
pub fn commit(hosts: &HostsFile, cfg: &Config) -> anyhow::Result<()> {
    if cfg.dry_run {
        print::print(&hosts.to_hosts_string());
        warn!("Dry run: {} left untouched", cfg.hosts_file.display());
        return Ok(());
    }

    storage::save(&cfg.hosts_file, hosts)
        .with_context(|| format!("error writing to hosts file {}", cfg.hosts_file.display()))
}

pub fn load(cfg: &Config) -> anyhow::Result<HostsFile> {
    storage::load(&cfg.hosts_file)
        .with_context(|| format!("error reading hosts file {}", cfg.hosts_file.display()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
