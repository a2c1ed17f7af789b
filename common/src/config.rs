use std::path::PathBuf;

#[cfg(windows)]
pub const DEFAULT_HOSTS_FILE: &str = r"C:\Windows\System32\drivers\etc\hosts";
#[cfg(not(windows))]
pub const DEFAULT_HOSTS_FILE: &str = "/etc/hosts";

#[derive(Debug, Clone)]
pub struct Config {
    /// The hosts file every command reads and, when something changed, rewrites.
    pub hosts_file: PathBuf,
    /// Output verbosity.
    ///
    /// `0` prints headers and trees, `1` plain lines, `2` errors only.
    pub quiet: u8,
    /// Print the would-be file content instead of writing it.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_file: PathBuf::from(DEFAULT_HOSTS_FILE),
            quiet: 0,
            dry_run: false,
        }
    }
}
