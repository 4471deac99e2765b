//! The canonical failure representation and panic-payload normalization.
//!
//! Every panic caught by the wrappers in [`crate::catch`] is coerced into a
//! [`Failure`] carrying a human-readable message. Payloads that are already
//! a `Failure` pass through unchanged, so normalization is idempotent and
//! attached fields survive the trip across the unwind boundary.

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message used when a panic payload has no textual rendering.
///
/// Rust panic payloads are `Box<dyn Any + Send>`; outside of strings and
/// primitives there is no universal way to turn one into text.
pub const OPAQUE_PAYLOAD_MESSAGE: &str = "opaque panic payload";

/// A captured failure.
///
/// The message is always present. An optional context annotation can be
/// attached with [`Failure::with_context`] and survives normalization when
/// the failure itself is used as a panic payload (via
/// [`std::panic::panic_any`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[error("{message}")]
pub struct Failure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Failure {
    /// Build a failure from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
            context: None,
        }
    }

    /// Build a failure from anything that renders as text.
    ///
    /// Useful for folding an `Err` value into the canonical shape without
    /// going through a panic.
    pub fn from_display(source: impl std::fmt::Display) -> Self {
        Failure::new(source.to_string())
    }

    /// Attach a context annotation describing what was being attempted.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Normalize a caught panic payload into a `Failure`.
    ///
    /// Rules, in order:
    /// - a payload that is already a `Failure` is returned unchanged;
    /// - `String` and `&'static str` payloads become the message verbatim
    ///   (these are what `panic!` itself produces);
    /// - primitive payloads (`panic_any(404)` and friends) become their
    ///   standard text rendering;
    /// - anything else becomes [`OPAQUE_PAYLOAD_MESSAGE`].
    ///
    /// Total: never panics, whatever the payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Failure>() {
            Ok(failure) => return *failure,
            Err(other) => other,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Failure::new(*message),
            Err(other) => other,
        };
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            return Failure::new(*message);
        }

        macro_rules! render_primitive {
            ($($ty:ty),+ $(,)?) => {
                $(
                    if let Some(value) = payload.downcast_ref::<$ty>() {
                        return Failure::new(value.to_string());
                    }
                )+
            };
        }
        render_primitive!(
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
        );

        Failure::new(OPAQUE_PAYLOAD_MESSAGE)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_str_payload_becomes_message() {
        let failure = Failure::from_panic(Box::new("string error"));
        assert_eq!(failure.message, "string error");
        assert_eq!(failure.context, None);
    }

    #[test]
    fn string_payload_becomes_message() {
        let failure = Failure::from_panic(Box::new(String::from("owned error")));
        assert_eq!(failure.message, "owned error");
    }

    #[test]
    fn numeric_payloads_render_as_decimal_text() {
        assert_eq!(Failure::from_panic(Box::new(404_i32)).message, "404");
        assert_eq!(Failure::from_panic(Box::new(7_u64)).message, "7");
        assert_eq!(Failure::from_panic(Box::new(-3_isize)).message, "-3");
        assert_eq!(Failure::from_panic(Box::new(1.5_f64)).message, "1.5");
    }

    #[test]
    fn bool_and_char_payloads_render() {
        assert_eq!(Failure::from_panic(Box::new(true)).message, "true");
        assert_eq!(Failure::from_panic(Box::new('x')).message, "x");
    }

    #[test]
    fn unit_payload_falls_back_to_placeholder() {
        let failure = Failure::from_panic(Box::new(()));
        assert_eq!(failure.message, OPAQUE_PAYLOAD_MESSAGE);
    }

    #[test]
    fn plain_data_payload_falls_back_to_placeholder() {
        #[derive(Debug)]
        struct Record {
            #[allow(dead_code)]
            code: u32,
        }
        let failure = Failure::from_panic(Box::new(Record { code: 9 }));
        assert_eq!(failure.message, OPAQUE_PAYLOAD_MESSAGE);
    }

    #[test]
    fn canonical_payload_passes_through_unchanged() {
        let original = Failure::new("disk full").with_context("writing checkpoint");
        let normalized = Failure::from_panic(Box::new(original.clone()));
        assert_eq!(normalized, original);

        // Idempotent: normalizing again changes nothing.
        let again = Failure::from_panic(Box::new(normalized.clone()));
        assert_eq!(again, normalized);
    }

    #[test]
    fn display_renders_message_only() {
        let failure = Failure::new("boom").with_context("step 3");
        assert_eq!(failure.to_string(), "boom");
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Failure::new("boom"));
    }

    #[test]
    fn serde_surface() {
        let failure = Failure::new("boom").with_context("step 3");
        insta::assert_json_snapshot!(failure, @r#"
        {
          "message": "boom",
          "context": "step 3"
        }
        "#);
    }

    #[test]
    fn serde_omits_absent_context() {
        let json = serde_json::to_value(Failure::new("boom")).expect("serialize");
        assert_eq!(json, serde_json::json!({ "message": "boom" }));
    }

    #[test]
    fn serde_round_trip() {
        let failure = Failure::new("boom").with_context("step 3");
        let json = serde_json::to_string(&failure).expect("serialize");
        let back: Failure = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, failure);
    }
}
