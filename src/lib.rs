#![doc = include_str!("../README.md")]

// Core modules
pub mod errors;
pub mod hooks;
mod log_utils;
pub mod state;

// Re-export commonly used items at crate root for convenience
pub use hooks::{use_async, use_async_with_options};
pub use state::{State, Status};

pub mod prelude {
    //! The prelude exports all the most common types and functions for using dioxus-use-async.

    // The core hooks
    pub use crate::hooks::{use_async, use_async_with_options};

    // The tracker handle and its options
    pub use crate::hooks::{UseAsync, UseAsyncOptions};

    // The async state types, needed for matching
    pub use crate::state::{AsyncState, State, Status};

    // Suspense support
    pub use crate::hooks::{RenderError, SuspendExt};

    // Error types
    pub use crate::errors::AsyncError;
}
