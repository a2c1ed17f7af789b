//! End-to-end tests for the hostsctl crates: load from disk, edit, save, reload.

mod hosts_file;
