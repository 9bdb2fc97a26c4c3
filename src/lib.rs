//! Utility layer for a log processing and reporting tool.
//!
//! The pieces a report pipeline leans on once the actual log matching is
//! done: scaling values between metric prefixes for human-readable output
//! ([`units`]), gzipping raw logs in chunks with a progress bar
//! ([`compress`]), rendering result lists ([`report`]), expanding
//! `${NAME}` templates ([`template`]), dispatching the finished report by
//! mail ([`mail`]), plus logging setup ([`logging`]) and small path/stream
//! helpers ([`paths`]).

pub mod compress;
pub mod logging;
pub mod mail;
pub mod paths;
pub mod report;
pub mod template;
pub mod units;

/// Crate version, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line crate description, taken from the package manifest.
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
