//! Bounded retry with exponential backoff for storage calls.

use std::{fmt::Display, future::Future, time::Duration};
use tokio::time::sleep;
use tracing::{debug, warn};

use models::db::DatabaseConfig;
use sea_orm::DbErr;

use crate::errors::{is_transient_db_err, ServiceError};

/// Errors that can tell whether another attempt may succeed.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for ServiceError {
    fn is_retryable(&self) -> bool { self.is_transient() }
}

impl Retryable for DbErr {
    fn is_retryable(&self) -> bool { is_transient_db_err(self) }
}

#[derive(Clone, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base: Duration,
    backoff_max: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_base: Duration, backoff_max: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base,
            backoff_max,
        }
    }

    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        Self::new(
            cfg.retry_max_attempts,
            Duration::from_millis(cfg.retry_backoff_ms),
            Duration::from_millis(cfg.retry_backoff_max_ms),
        )
    }

    /// One attempt, no waiting.
    pub fn disabled() -> Self {
        Self::new(1, Duration::ZERO, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before retry number `attempt` (1-based), capped at `backoff_max`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let factor = 2_u32.saturating_pow(attempt - 1);
        self.backoff_base.saturating_mul(factor).min(self.backoff_max)
    }

    pub async fn wait_before_retry(&self, attempt: u32) {
        let d = self.backoff(attempt);
        if d.is_zero() {
            return;
        }
        debug!(?d, attempt, "retrying after backoff");
        sleep(d).await;
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&DatabaseConfig::default())
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// the policy runs out of attempts. The last error is returned.
pub async fn retry_with_policy<F, Fut, T, E>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + Display,
{
    let mut attempt = 0;
    loop {
        if attempt > 0 {
            policy.wait_before_retry(attempt).await;
        }
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!(retries = attempt, "operation succeeded after retries");
                }
                return Ok(result);
            }
            Err(error) => {
                attempt += 1;
                if attempt < policy.max_attempts() && error.is_retryable() {
                    warn!(attempt, max = policy.max_attempts(), error = %error, "transient storage failure");
                    continue;
                }
                return Err(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy(max: u32) -> RetryPolicy {
        RetryPolicy::new(max, Duration::from_millis(1), Duration::from_millis(5))
    }

    #[tokio::test]
    async fn success_first_try() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(&fast_policy(3), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<i32, ServiceError>(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn success_after_transient_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(&fast_policy(3), || {
            let c = c.clone();
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(ServiceError::Unavailable("connection reset".into()))
                } else {
                    Ok(7)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(&fast_policy(2), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(ServiceError::Unavailable("down".into()))
            }
        })
        .await;

        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_transient_errors_are_not_retried() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(&fast_policy(5), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(ServiceError::Conflict("dup".into()))
            }
        })
        .await;

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn disabled_policy_tries_once() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let _ = retry_with_policy(&RetryPolicy::disabled(), || {
            let c = c.clone();
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(ServiceError::Unavailable("down".into()))
            }
        })
        .await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let p = RetryPolicy::new(10, Duration::from_millis(100), Duration::from_millis(350));
        assert_eq!(p.backoff(0), Duration::ZERO);
        assert_eq!(p.backoff(1), Duration::from_millis(100));
        assert_eq!(p.backoff(2), Duration::from_millis(200));
        assert_eq!(p.backoff(3), Duration::from_millis(350));
        assert_eq!(p.backoff(40), Duration::from_millis(350));
    }

    #[test]
    fn zero_attempts_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO, Duration::ZERO).max_attempts(), 1);
    }
}
