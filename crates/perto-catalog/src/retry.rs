//! Retry with exponential backoff for transient fetch errors.
//!
//! Network-level failures and 5xx responses are worth retrying; a 404 or a
//! payload that does not parse will come back the same way every time and is
//! propagated immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
fn is_retriable(err: &CatalogError) -> bool {
    match err {
        CatalogError::Http(_) => true,
        CatalogError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps `backoff_base_secs * 2^attempt`
/// seconds and tries again, up to `max_retries` additional attempts after
/// the first try; if all retries are exhausted the last error is returned.
/// Non-retriable errors are returned immediately without sleeping.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CatalogError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^attempt seconds, capped to avoid
        // overflow on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient fetch error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
