//! Shared building blocks for the `hostsctl` crates.
//!
//! * **[`config`]**: runtime options handed from the CLI to every command.
//! * **[`network`]**: IP address helpers, including the validity predicate used by the parser.
//! * Logging macros ([`success!`], [`info!`], [`warn!`], [`error!`]) wrapping `tracing`.

pub mod config;
pub mod log;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;
