//! Bounded retry with exponential backoff.

use std::future::Future;
use std::time::Duration;

/// How many times to attempt an operation and how long to wait between
/// attempts.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay before the attempt after `attempt`.
    ///
    /// Exponential: base * 2^(attempt-1), capped at 2^10, with 0-25%
    /// jitter so simultaneous callers spread out.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(10);
        let delay_ms = (self.base_delay.as_millis() as u64).saturating_mul(1 << exp);

        let jitter_range = delay_ms / 4;
        let jitter = if jitter_range > 0 {
            rand::random::<u64>() % jitter_range
        } else {
            0
        };

        Duration::from_millis(delay_ms + jitter)
    }
}

/// What a single attempt decided.
#[derive(Debug)]
pub enum Attempt<T> {
    /// The attempt produced a usable value.
    Ready(T),
    /// The attempt hit a retryable condition; try again.
    Again,
}

/// Terminal outcome of a retried operation.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    Success { value: T, attempts: u32 },
    Exhausted { attempts: u32 },
}

/// Drive `op` until it yields a value or the attempt budget is spent.
/// `op` receives the 1-based attempt number. Errors are not retried; they
/// bubble out immediately.
pub async fn run<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> std::result::Result<RetryOutcome<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = std::result::Result<Attempt<T>, E>>,
{
    let mut attempt = 0;
    while attempt < policy.max_attempts {
        attempt += 1;
        match op(attempt).await? {
            Attempt::Ready(value) => {
                return Ok(RetryOutcome::Success {
                    value,
                    attempts: attempt,
                });
            }
            Attempt::Again => {
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.backoff(attempt)).await;
                }
            }
        }
    }
    Ok(RetryOutcome::Exhausted {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: RetryPolicy = RetryPolicy::new(3, Duration::from_millis(1));

    #[tokio::test]
    async fn test_first_attempt_success() {
        let outcome: Result<RetryOutcome<i32>, ()> =
            run(FAST, |_| async { Ok(Attempt::Ready(7)) }).await;
        match outcome.unwrap() {
            RetryOutcome::Success { value, attempts } => {
                assert_eq!(value, 7);
                assert_eq!(attempts, 1);
            }
            RetryOutcome::Exhausted { .. } => panic!("expected success"),
        }
    }

    #[tokio::test]
    async fn test_succeeds_on_later_attempt() {
        let outcome: Result<RetryOutcome<u32>, ()> = run(FAST, |attempt| async move {
            if attempt < 3 {
                Ok(Attempt::Again)
            } else {
                Ok(Attempt::Ready(attempt))
            }
        })
        .await;
        match outcome.unwrap() {
            RetryOutcome::Success { value, attempts } => {
                assert_eq!(value, 3);
                assert_eq!(attempts, 3);
            }
            RetryOutcome::Exhausted { .. } => panic!("expected success"),
        }
    }

    #[tokio::test]
    async fn test_exhausts_attempt_budget() {
        let mut calls = 0;
        let outcome: Result<RetryOutcome<()>, ()> = run(FAST, |_| {
            calls += 1;
            async { Ok(Attempt::Again) }
        })
        .await;
        assert!(matches!(
            outcome.unwrap(),
            RetryOutcome::Exhausted { attempts: 3 }
        ));
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_error_short_circuits() {
        let mut calls = 0;
        let outcome: Result<RetryOutcome<()>, &str> = run(FAST, |_| {
            calls += 1;
            async { Err("boom") }
        })
        .await;
        assert_eq!(outcome.unwrap_err(), "boom");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_backoff_grows_exponentially() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        let first = policy.backoff(1);
        let third = policy.backoff(3);
        assert!(first >= Duration::from_millis(100));
        assert!(first < Duration::from_millis(126));
        assert!(third >= Duration::from_millis(400));
        assert!(third < Duration::from_millis(501));
    }
}
