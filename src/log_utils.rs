//! Internal logging utilities for consistent log formatting across the library
//!
//! This module provides macros that adapt log messages based on feature flags:
//! - `tracing`: Enable/disable all logging (enabled by default)
//! - `plain-logs`: When enabled with `tracing`, uses plain text prefixes instead of emojis
//!
//! ## Usage
//!
//! ```toml
//! # Default: tracing enabled with emojis
//! dioxus-use-async = "0.1"
//!
//! # Disable all logging
//! dioxus-use-async = { version = "0.1", default-features = false }
//!
//! # Enable tracing with plain text (no emojis)
//! dioxus-use-async = { version = "0.1", features = ["plain-logs"] }
//! ```

/// Internal debug logging macro that respects the tracing feature flag
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Logs the start of an execution with appropriate formatting
#[macro_export]
macro_rules! log_execute {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🚀 [EXECUTE] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[EXECUTE] {}", format!($($arg)*));
    };
}

/// Logs a successful settlement with appropriate formatting
#[macro_export]
macro_rules! log_settle_success {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("✅ [SETTLED] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[SETTLED-SUCCESS] {}", format!($($arg)*));
    };
}

/// Logs a failed settlement with appropriate formatting
#[macro_export]
macro_rules! log_settle_error {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("❌ [SETTLED] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[SETTLED-ERROR] {}", format!($($arg)*));
    };
}

/// Logs a discarded stale settlement with appropriate formatting
#[macro_export]
macro_rules! log_stale_drop {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🧹 [STALE-DROP] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[STALE-DROP] {}", format!($($arg)*));
    };
}

/// Logs a cancelled execution with appropriate formatting
#[macro_export]
macro_rules! log_cancel {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "tracing", not(feature = "plain-logs")))]
        tracing::debug!("🛑 [CANCEL] {}", format!($($arg)*));
        #[cfg(all(feature = "tracing", feature = "plain-logs"))]
        tracing::debug!("[CANCEL] {}", format!($($arg)*));
    };
}
