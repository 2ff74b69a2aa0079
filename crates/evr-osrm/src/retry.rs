//! Retry with exponential backoff for OSRM HTTP calls.
//!
//! Retries only transient transport errors (connection failures, timeouts).
//! Non-retryable outcomes (4xx/5xx responses, decode failures) are the
//! caller's to inspect — a response, once received, is never retried here.

use std::time::Duration;

/// Base delay between retries (doubles each attempt: 200ms, 400ms, 800ms…).
const BASE_DELAY_MS: u64 = 200;

/// Send an HTTP request with exponential backoff on transport errors.
///
/// The closure `f` is called up to `max_retries + 1` times; the last call's
/// error is returned as-is.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let delay = Duration::from_millis(BASE_DELAY_MS * 2u64.pow(attempt));
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "OSRM request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    // Final attempt — no more retries.
    f().await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn retry_exhausts_all_attempts_on_transport_failure() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = call_count.clone();

        let result = retry_send(2, || {
            let cc = cc.clone();
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                // Request to a guaranteed-closed port → connection refused.
                reqwest::Client::builder()
                    .timeout(Duration::from_millis(50))
                    .build()
                    .unwrap()
                    .get("http://127.0.0.1:1/")
                    .send()
                    .await
            }
        })
        .await;

        assert!(result.is_err(), "request to closed port must fail");
        assert_eq!(call_count.load(Ordering::SeqCst), 3, "2 retries + final try");
    }

    #[tokio::test]
    async fn zero_retries_calls_once() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = call_count.clone();

        let _ = retry_send(0, || {
            let cc = cc.clone();
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                reqwest::Client::builder()
                    .timeout(Duration::from_millis(50))
                    .build()
                    .unwrap()
                    .get("http://127.0.0.1:1/")
                    .send()
                    .await
            }
        })
        .await;

        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }
}
