//! Suspense integration for tracked async operations

use dioxus::core::SuspendedFuture;
use dioxus::prelude::ReadableExt;

use crate::hooks::use_async::UseAsync;
use crate::state::State;

/// Extension trait to enable suspense support for tracker handles
///
/// Allows you to call `.suspend()` on a [`UseAsync`] handle inside a
/// component. While the tracked operation is pending, this suspends
/// rendering and triggers Dioxus's SuspenseBoundary fallback. An idle
/// tracker does not suspend; it yields `Ok(None)`.
///
/// Usage:
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_use_async::prelude::*;
///
/// #[component]
/// fn User() -> Element {
///     let user = use_async(|| async { Ok::<_, AsyncError>("Ada".to_string()) });
///     let loaded = user.suspend()?;
///     rsx! {
///         match loaded {
///             Some(Ok(name)) => rsx! { div { "{name}" } },
///             Some(Err(err)) => rsx! { div { "Failed: {err}" } },
///             None => rsx! { div { "Not started" } },
///         }
///     }
/// }
/// ```
pub trait SuspendExt<T, E> {
    /// Returns `Ok(Some(result))` if settled, `Ok(None)` if idle, or
    /// `Err(RenderError::Suspended)` while pending.
    fn suspend(&self) -> Result<Option<Result<T, E>>, RenderError>;
}

/// Error type for suspending rendering (compatible with Dioxus SuspenseBoundary)
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Suspended(SuspendedFuture),
}

// Implement conversion so `?` works in components using Dioxus's RenderError
impl From<RenderError> for dioxus::core::RenderError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Suspended(fut) => dioxus::core::RenderError::Suspended(fut),
        }
    }
}

impl<T: Clone + 'static, E: Clone + 'static> SuspendExt<T, E> for UseAsync<T, E> {
    fn suspend(&self) -> Result<Option<Result<T, E>>, RenderError> {
        match &*self.state().read() {
            State::Idle => Ok(None),
            State::Pending { task } => Err(RenderError::Suspended(SuspendedFuture::new(*task))),
            State::Success(data) => Ok(Some(Ok(data.clone()))),
            State::Error(error) => Ok(Some(Err(error.clone()))),
        }
    }
}
