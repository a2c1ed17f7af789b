//! # hostsctl core
//!
//! A round-trippable model of a hosts file.
//!
//! * **[`hosts`]**: the line model, the parser, the add/remove/merge edits and the serializer.
//! * **[`storage`]**: reading and writing the file on disk.
//! * **[`error`]**: the error type shared by both.

pub mod error;
pub mod hosts;
pub mod storage;

pub use error::{HostsError, Result};
pub use hosts::{Entry, HostLine, HostsFile, LineEnding, LineKind};
