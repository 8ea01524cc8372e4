//! Async delay helpers
//!
//! Thin wrappers over the tokio timer. The returned futures suspend only the
//! calling task; dropping them (for example through `tokio::select!` or task
//! abort) is the only way to cancel.

use std::time::Duration;

#[cfg(feature = "observability")]
use tracing::trace;

/// Resolve after `duration` has elapsed.
///
/// Completion happens no earlier than `duration`; there is no ordering
/// guarantee between concurrent delays beyond that.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(feature = "runtime")]
/// # {
/// use std::time::Duration;
///
/// use toolbelt_common::time::sleep;
///
/// #[tokio::main]
/// async fn main() {
///     sleep(Duration::from_millis(250)).await;
/// }
/// # }
/// ```
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "observability")]
    trace!(delay_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX), "sleeping");
    tokio::time::sleep(duration).await;
}

/// [`sleep`] for a number of milliseconds.
pub async fn sleep_ms(millis: u64) {
    sleep(Duration::from_millis(millis)).await;
}
