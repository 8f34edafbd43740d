//! Per-call execution context.
//!
//! A [`Context`] carries an optional deadline and an optional cancellation
//! token. Every network suspension point of a call runs under it.

use std::future::{pending, Future};
use std::time::Duration;

use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::{CcError, Result};

/// Deadline and cancellation for a single call.
///
/// Cheap to clone. The default context never expires and cannot be
/// cancelled.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ccv2::Context;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = Context::background()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancellation(token.clone());
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancellation: Option<CancellationToken>,
}

impl Context {
    /// A context with no deadline and no cancellation.
    pub fn background() -> Self {
        Self::default()
    }

    /// Expire `timeout` from now, or keep an earlier deadline.
    ///
    /// A timeout too large to represent leaves the deadline unchanged.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Expire at `deadline`, or keep an earlier one.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Abort in-flight work when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the attached token has fired.
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drive `fut` until it completes, the token fires or the deadline passes.
    ///
    /// Cancellation wins over an expired deadline, which wins over a ready
    /// future.
    pub(crate) async fn run<F: Future>(&self, operation: &'static str, fut: F) -> Result<F::Output> {
        let cancelled = async {
            match &self.cancellation {
                Some(token) => token.cancelled().await,
                None => pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(CcError::Cancelled { operation }),
            () = expired => Err(CcError::DeadlineExceeded { operation }),
            out = fut => Ok(out),
        }
    }
}
