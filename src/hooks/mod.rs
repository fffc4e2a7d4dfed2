//! Hooks for tracking async operations in Dioxus components

mod suspense;
mod use_async;

pub use suspense::{RenderError, SuspendExt};
pub use use_async::{UseAsync, UseAsyncOptions, use_async, use_async_with_options};
