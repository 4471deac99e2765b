//! The three entry points: wrap a future factory, a synchronous closure, or
//! an already-constructed future, and get an [`Outcome`] back.
//!
//! No panic crosses out of any wrapper. The wrappers add nothing else — no
//! retries, no timeouts, no logging — and hold no state across calls. If
//! the underlying future never settles, the await never resumes; composing
//! a timeout is the caller's job.
//!
//! Unwind safety is asserted throughout: after a panic the operation's
//! state is discarded wholesale and only the payload is inspected.

use crate::failure::Failure;
use crate::outcome::Outcome;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Run a future-producing operation and capture any panic as data.
///
/// `op` may panic in two places: synchronously, before a future is ever
/// produced, or later while the produced future is polled. Both land in the
/// same normalized-failure slot of the outcome. Suspends exactly once, on
/// the produced future.
pub async fn catch<T, F, Fut>(op: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(fut) => catch_future(fut).await,
        Err(payload) => Outcome::failure(Failure::from_panic(payload)),
    }
}

/// Run a synchronous operation and capture any panic as data.
///
/// Never suspends. For call sites with no asynchronous work at all, such as
/// parsing or formatting.
pub fn catch_sync<T, F>(op: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::failure(Failure::from_panic(payload)),
    }
}

/// Await an already-constructed future and capture any panic as data.
///
/// The computation was started by the caller before this wrapper ever ran,
/// so a panic raised while *constructing* the future is the caller's to
/// deal with; this wrapper only traps panics raised during polling.
pub async fn catch_future<T, Fut>(fut: Fut) -> Outcome<T>
where
    Fut: Future<Output = T>,
{
    match CatchUnwind::new(fut).await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::failure(Failure::from_panic(payload)),
    }
}

/// Future adapter that traps panics at the poll boundary.
///
/// Resolves to `Err(payload)` on the first poll that panics; the inner
/// future is never polled again after that.
struct CatchUnwind<F> {
    inner: Pin<Box<F>>,
}

impl<F: Future> CatchUnwind<F> {
    fn new(inner: F) -> Self {
        CatchUnwind {
            inner: Box::pin(inner),
        }
    }
}

impl<F: Future> Future for CatchUnwind<F> {
    type Output = Result<F::Output, Box<dyn Any + Send>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // `Pin<Box<F>>` is `Unpin`, so getting at the inner future is safe.
        let this = self.get_mut();
        match panic::catch_unwind(AssertUnwindSafe(|| this.inner.as_mut().poll(cx))) {
            Ok(Poll::Ready(value)) => Poll::Ready(Ok(value)),
            Ok(Poll::Pending) => Poll::Pending,
            Err(payload) => Poll::Ready(Err(payload)),
        }
    }
}
