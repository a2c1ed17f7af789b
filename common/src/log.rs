//! Thin wrappers over `tracing` so every crate reports through the same targets.
//!
//! The CLI formatter renders `hostsctl::success` events with their own symbol.

pub const SUCCESS_TARGET: &str = "hostsctl::success";
pub const PRINT_TARGET: &str = "hostsctl::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "hostsctl::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
