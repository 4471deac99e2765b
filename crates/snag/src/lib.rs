//! # Snag
//!
//! Panic capture as data. Run a fallible operation — synchronous,
//! asynchronous, or an already-in-flight future — through one calling
//! convention and get back an [`Outcome`]: either the produced value, or a
//! normalized [`Failure`] with an optional caller-supplied fallback in the
//! value slot. No panic ever crosses out of a wrapper.
//!
//! ## Architecture
//!
//! ```text
//! Failure               ← canonical failure: message + optional context
//!     │
//! Failure::from_panic   ← total normalization of any panic payload
//!     │
//! Outcome<T>            ← the (failure, value) pair as a tagged sum
//!     │
//! catch / catch_sync / catch_future
//!                       ← the three entry points, one shared contract
//! ```
//!
//! ## Example
//!
//! ```
//! let parsed = snag::catch_sync(|| "42".parse::<u32>().unwrap());
//! assert_eq!(parsed.value(), Some(&42));
//!
//! let failed = snag::catch_sync(|| -> u32 { panic!("no dice") }).or_fallback(0);
//! assert_eq!(failed.error().map(|e| e.message.as_str()), Some("no dice"));
//! assert_eq!(failed.value(), Some(&0));
//! ```
//!
//! Deliberately out of scope: retries, timeouts, cancellation, and any
//! aggregation of concurrent operations. Compose those around the wrappers.

pub mod catch;
pub mod failure;
pub mod outcome;

pub use catch::{catch, catch_future, catch_sync};
pub use failure::{Failure, OPAQUE_PAYLOAD_MESSAGE};
pub use outcome::Outcome;
