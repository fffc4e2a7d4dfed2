//! State: Async lifecycle state for dioxus-use-async
//!
//! This module provides the `State` enum, the `Status` discriminant, and the
//! `AsyncState` trait for inspecting tracked asynchronous operations.

use dioxus::core::Task;

/// The lifecycle stage of a tracked async operation.
///
/// `Display` renders the lowercase name (`"idle"`, `"pending"`, `"success"`,
/// `"error"`), which is handy for logging and UI class names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    /// No execution has started yet
    #[default]
    Idle,
    /// An execution is in flight
    Pending,
    /// The latest execution resolved with a value
    Success,
    /// The latest execution rejected with an error
    Error,
}

impl Status {
    /// Returns the lowercase string form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Pending => "pending",
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for async state types that expose a four-stage lifecycle
///
/// This trait provides a unified interface for inspecting tracked operations
/// without matching on the concrete enum.
pub trait AsyncState {
    /// The type of successful data
    type Data;
    /// The type of error
    type Error;

    /// Returns the lifecycle stage of the state
    fn status(&self) -> Status;

    /// Returns true if no execution has started yet
    fn is_idle(&self) -> bool {
        self.status() == Status::Idle
    }

    /// Returns true if an execution is currently in flight
    fn is_pending(&self) -> bool {
        self.status() == Status::Pending
    }

    /// Returns true if the state contains successful data
    fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    /// Returns true if the state contains an error
    fn is_error(&self) -> bool {
        self.status() == Status::Error
    }

    /// Returns the data if successful, None otherwise
    fn data(&self) -> Option<&Self::Data>;

    /// Returns the error if failed, None otherwise
    fn error(&self) -> Option<&Self::Error>;
}

/// Represents the state of a tracked async operation
///
/// A sum type makes the lifecycle invariants structural: exactly one status
/// holds at a time, and a value and an error can never coexist.
#[derive(Clone, PartialEq, Debug)]
pub enum State<T, E> {
    /// No execution has started yet
    Idle,
    /// The operation is currently in flight
    Pending { task: Task },
    /// The operation completed successfully with data
    Success(T),
    /// The operation failed with an error
    Error(E),
}

// Manual impl to avoid spurious `T: Default, E: Default` bounds from the derive
impl<T, E> Default for State<T, E> {
    fn default() -> Self {
        State::Idle
    }
}

impl<T, E> AsyncState for State<T, E> {
    type Data = T;
    type Error = E;

    fn status(&self) -> Status {
        match self {
            State::Idle => Status::Idle,
            State::Pending { task: _ } => Status::Pending,
            State::Success(_) => Status::Success,
            State::Error(_) => Status::Error,
        }
    }

    fn data(&self) -> Option<&T> {
        match self {
            State::Success(data) => Some(data),
            _ => None,
        }
    }

    fn error(&self) -> Option<&E> {
        match self {
            State::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T, E> State<T, E> {
    /// Returns the lifecycle stage of the state
    pub fn status(&self) -> Status {
        <Self as AsyncState>::status(self)
    }

    /// Returns true if no execution has started yet
    pub fn is_idle(&self) -> bool {
        <Self as AsyncState>::is_idle(self)
    }

    /// Returns true if an execution is currently in flight
    pub fn is_pending(&self) -> bool {
        <Self as AsyncState>::is_pending(self)
    }

    /// Returns true if the state contains successful data
    pub fn is_success(&self) -> bool {
        <Self as AsyncState>::is_success(self)
    }

    /// Returns true if the state contains an error
    pub fn is_error(&self) -> bool {
        <Self as AsyncState>::is_error(self)
    }

    /// Returns the data if successful, None otherwise
    pub fn data(&self) -> Option<&T> {
        <Self as AsyncState>::data(self)
    }

    /// Returns the error if failed, None otherwise
    pub fn error(&self) -> Option<&E> {
        <Self as AsyncState>::error(self)
    }

    /// Maps a State<T, E> to State<U, E> by applying a function to the contained data if successful.
    pub fn map<U, F>(self, op: F) -> State<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            State::Idle => State::Idle,
            State::Pending { task } => State::Pending { task },
            State::Success(data) => State::Success(op(data)),
            State::Error(e) => State::Error(e),
        }
    }

    /// Maps a State<T, E> to State<T, F> by applying a function to the contained error if failed.
    pub fn map_err<F, O>(self, op: O) -> State<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            State::Idle => State::Idle,
            State::Pending { task } => State::Pending { task },
            State::Success(data) => State::Success(data),
            State::Error(e) => State::Error(op(e)),
        }
    }

    /// Chains a State<T, E> to State<U, E> by applying a function to the contained data if successful.
    pub fn and_then<U, F>(self, op: F) -> State<U, E>
    where
        F: FnOnce(T) -> State<U, E>,
    {
        match self {
            State::Idle => State::Idle,
            State::Pending { task } => State::Pending { task },
            State::Success(data) => op(data),
            State::Error(e) => State::Error(e),
        }
    }
}
