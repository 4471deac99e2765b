//! The two-slot outcome produced by every wrapper.
//!
//! An [`Outcome`] is the (failure, value) pair as a tagged sum: either the
//! operation produced a value, or it failed and the value slot holds an
//! optional caller-supplied fallback. The two slots are never both "real" —
//! a genuine produced value cannot coexist with a failure, and the enum
//! makes that unrepresentable.

use crate::failure::Failure;
use serde::{Deserialize, Serialize};

/// Result of running an operation through one of the [`crate::catch`]
/// wrappers.
///
/// Created fresh on each wrapper invocation; combinators consume and
/// rebuild rather than mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation settled with a value.
    Success(T),
    /// The operation panicked; the payload was normalized into `error`.
    Failure {
        error: Failure,
        /// Caller-supplied substitute for the value slot, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<T>,
    },
}

impl<T> Outcome<T> {
    /// A successful outcome holding the produced value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A failed outcome with no fallback installed.
    pub fn failure(error: impl Into<Failure>) -> Self {
        Outcome::Failure {
            error: error.into(),
            fallback: None,
        }
    }

    /// Fold a plain `Result` into the canonical shape.
    ///
    /// The `Err` value is rendered through `Display`; no panic is involved.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure(Failure::from_display(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The normalized failure, when one occurred.
    pub fn error(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    /// The value slot: the produced value on success, the fallback (if one
    /// was installed) on failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { fallback, .. } => fallback.as_ref(),
        }
    }

    /// Install `value` as the fallback if this outcome is a failure.
    ///
    /// Identity on success; replaces any previously installed fallback.
    pub fn or_fallback(self, value: T) -> Self {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure { error, .. } => Outcome::Failure {
                error,
                fallback: Some(value),
            },
        }
    }

    /// Consume the outcome, yielding the value slot.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { fallback, .. } => fallback,
        }
    }

    /// Consume the outcome, yielding a plain `Result`.
    ///
    /// Any installed fallback is dropped: a failure stays a failure.
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure { error, .. } => Err(error),
        }
    }

    /// Decompose into the literal (failure, value) two-slot pair.
    ///
    /// Exactly one of these holds per construction: failure absent with the
    /// produced value present, or failure present with the value slot
    /// holding the fallback (or nothing).
    pub fn into_parts(self) -> (Option<Failure>, Option<T>) {
        match self {
            Outcome::Success(value) => (None, Some(value)),
            Outcome::Failure { error, fallback } => (Some(error), fallback),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
