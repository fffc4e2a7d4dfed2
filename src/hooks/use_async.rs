//! # Async Operation Tracking Hook
//!
//! This module provides `use_async`, a hook that wraps a caller-supplied
//! async operation with lifecycle tracking and a re-execute trigger.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_use_async::prelude::*;
//!
//! async fn fetch_greeting() -> Result<String, AsyncError> {
//!     Ok("Hello, World!".to_string())
//! }
//!
//! #[component]
//! fn Greeting() -> Element {
//!     let greeting = use_async(fetch_greeting);
//!
//!     rsx! {
//!         match &*greeting.state().read() {
//!             State::Idle => rsx! { button { onclick: move |_| { greeting.execute(); }, "Load" } },
//!             State::Pending { .. } => rsx! { div { "Loading..." } },
//!             State::Success(text) => rsx! { div { "{text}" } },
//!             State::Error(err) => rsx! { div { "Failed: {err}" } },
//!         }
//!     }
//! }
//! ```

use dioxus::{core::Task, prelude::*};
use std::future::Future;

use crate::state::{State, Status};

/// Options controlling how a tracker starts.
///
/// The default matches `use_async`: the operation runs once automatically
/// when the component mounts. Use [`UseAsyncOptions::deferred`] to wait for
/// an explicit [`UseAsync::execute`] call instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseAsyncOptions {
    immediate: bool,
}

impl UseAsyncOptions {
    /// Create options with default settings (immediate execution)
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a tracker that stays idle until `execute()` is called
    pub fn deferred() -> Self {
        Self { immediate: false }
    }

    /// Set whether the operation runs automatically on mount
    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub(crate) fn is_immediate(&self) -> bool {
        self.immediate
    }
}

impl Default for UseAsyncOptions {
    fn default() -> Self {
        Self { immediate: true }
    }
}

/// Handle to a tracked async operation.
///
/// Cheap to copy, like a `Signal`. The handle is the only writer of its
/// state; consumers observe through [`UseAsync::state`] or the snapshot
/// accessors and trigger new executions through [`UseAsync::execute`].
pub struct UseAsync<T: 'static, E: 'static> {
    state: Signal<State<T, E>>,
    generation: Signal<u64>,
    runner: Callback<(), Task>,
}

impl<T: 'static, E: 'static> Clone for UseAsync<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, E: 'static> Copy for UseAsync<T, E> {}

impl<T: 'static, E: 'static> PartialEq for UseAsync<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.runner == other.runner
    }
}

impl<T: 'static, E: 'static> UseAsync<T, E> {
    /// Start (or restart) the operation.
    ///
    /// Sets the state to `Pending`, discarding any prior value or error, and
    /// runs the operation on the Dioxus scheduler. Returns the spawned
    /// [`Task`] so callers can pause or cancel it.
    ///
    /// Calling `execute` while a previous call is still in flight starts a
    /// new operation; the earlier call's settlement is discarded when it
    /// arrives (last-call-wins).
    pub fn execute(&self) -> Task {
        self.runner.call(())
    }

    /// Read-only view of the tracked state for reactive consumption
    pub fn state(&self) -> ReadOnlySignal<State<T, E>> {
        self.state.into()
    }

    /// The current lifecycle stage
    pub fn status(&self) -> Status {
        self.state.read().status()
    }

    /// Cancel the in-flight operation, if any, and return to `Idle`.
    ///
    /// The underlying future is dropped, not interrupted mid-effect; a
    /// settlement already queued is discarded via the generation guard.
    pub fn cancel(&self) {
        let pending_task = match &*self.state.peek() {
            State::Pending { task } => *task,
            _ => return,
        };
        pending_task.cancel();

        let mut generation = self.generation;
        let invalidated = generation.peek().wrapping_add(1);
        generation.set(invalidated);

        let mut state = self.state;
        state.set(State::Idle);
        crate::log_cancel!("cancelled in-flight execution, tracker back to idle");
    }
}

impl<T: Clone + 'static, E: Clone + 'static> UseAsync<T, E> {
    /// The last successfully resolved value, if the tracker is in `Success`
    pub fn value(&self) -> Option<T> {
        self.state.read().data().cloned()
    }

    /// The last failure, if the tracker is in `Error`
    pub fn error(&self) -> Option<E> {
        self.state.read().error().cloned()
    }
}

/// Track an async operation, executing it immediately on mount.
///
/// The operation is a zero-argument closure returning a future of
/// `Result<T, E>`. It runs once automatically when the component mounts and
/// again on every [`UseAsync::execute`] call. Errors are caught and surfaced
/// through the state, never rethrown; retry is an explicit `execute()`.
///
/// Equivalent to `use_async_with_options(operation, UseAsyncOptions::new())`.
///
/// ## Example
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_use_async::prelude::*;
///
/// #[component]
/// fn Answer() -> Element {
///     let answer = use_async(|| async { Ok::<_, AsyncError>(42) });
///
///     rsx! {
///         div { "status: {answer.status()}" }
///         button { onclick: move |_| { answer.execute(); }, "Recompute" }
///     }
/// }
/// ```
pub fn use_async<F, Fut, T, E>(operation: F) -> UseAsync<T, E>
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    T: 'static,
    E: 'static,
{
    use_async_with_options(operation, UseAsyncOptions::new())
}

/// Track an async operation with explicit start options.
///
/// With [`UseAsyncOptions::deferred`] the tracker stays `Idle` until the
/// first [`UseAsync::execute`] call:
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_use_async::prelude::*;
///
/// #[component]
/// fn SaveButton() -> Element {
///     let save = use_async_with_options(
///         || async { Ok::<_, AsyncError>(()) },
///         UseAsyncOptions::deferred(),
///     );
///
///     rsx! {
///         button {
///             disabled: save.status() == Status::Pending,
///             onclick: move |_| { save.execute(); },
///             "Save"
///         }
///     }
/// }
/// ```
pub fn use_async_with_options<F, Fut, T, E>(
    mut operation: F,
    options: UseAsyncOptions,
) -> UseAsync<T, E>
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    T: 'static,
    E: 'static,
{
    let mut state = use_signal(|| State::Idle);
    let mut generation = use_signal(|| 0u64);

    let runner = use_callback(move |()| {
        // Claim a new generation so any previous in-flight settlement is
        // recognizable as stale when it arrives.
        let this_call = generation.peek().wrapping_add(1);
        generation.set(this_call);
        crate::log_execute!("starting execution (generation {})", this_call);

        let fut = operation();
        let task = spawn(async move {
            let result = fut.await;
            let still_latest = *generation.peek() == this_call;
            if !still_latest {
                crate::log_stale_drop!(
                    "dropping settlement of superseded execution (generation {})",
                    this_call
                );
                return;
            }
            match result {
                Ok(value) => {
                    crate::log_settle_success!("execution resolved (generation {})", this_call);
                    state.set(State::Success(value));
                }
                Err(error) => {
                    crate::log_settle_error!("execution rejected (generation {})", this_call);
                    state.set(State::Error(error));
                }
            }
        });
        state.set(State::Pending { task });
        task
    });

    // Auto-invoke once on mount, before any caller-triggered call
    use_hook(move || {
        if options.is_immediate() {
            runner.call(());
        }
    });

    UseAsync {
        state,
        generation,
        runner,
    }
}
