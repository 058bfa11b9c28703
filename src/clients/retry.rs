//! The retry loop that drives one logical call.
//!
//! [`execute`] sends an attempt, looks at its [`ResponseOutcome`] and either
//! returns, sleeps and retries (rate limited), or retries immediately
//! (service unavailable). The retry budget is the maximum number of attempts;
//! `0` and `1` both mean exactly one attempt.
//!
//! Sleeping goes through the [`Sleeper`] trait so the loop can be driven
//! without real time passing.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::HttpError;
use crate::clients::http_response::{HttpResponse, ResponseOutcome};

/// An asynchronous wait used between attempts.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    /// Suspends the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// A [`Sleeper`] backed by [`tokio::time::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Bookkeeping for one logical call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryState {
    /// Attempts still allowed, the current one included.
    pub attempts_remaining: u32,
    /// The 1-based number of the current attempt.
    pub attempt: u32,
}

impl RetryState {
    /// Starts a call with the given budget.
    #[must_use]
    pub fn new(budget: u32) -> Self {
        Self {
            attempts_remaining: budget.max(1),
            attempt: 1,
        }
    }

    /// Returns `true` if another attempt may follow the current one.
    #[must_use]
    pub const fn can_retry(&self) -> bool {
        self.attempts_remaining > 1
    }

    /// Moves on to the next attempt.
    pub fn advance(&mut self) {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.attempt += 1;
    }
}

/// Runs `attempt` until it succeeds, fails terminally, or the budget runs out.
///
/// `attempt` receives the 1-based attempt number. Its `Err` results (network
/// failures, unbuildable requests) are terminal and returned as-is.
///
/// # Errors
///
/// - [`HttpError::Response`] and [`HttpError::Decode`] as soon as they occur
/// - [`HttpError::RateLimited`] or [`HttpError::Transient`] once the budget
///   is exhausted
/// - [`HttpError::Cancelled`] if `cancel` fires during an attempt or a wait
/// - any error returned by `attempt`
pub async fn execute<T, S, F, Fut>(
    budget: u32,
    sleeper: &S,
    cancel: Option<&CancellationToken>,
    mut attempt: F,
) -> Result<HttpResponse<T>, HttpError>
where
    S: Sleeper,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ResponseOutcome<T>, HttpError>>,
{
    let mut state = RetryState::new(budget);

    loop {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(HttpError::Cancelled);
        }

        let outcome = tokio::select! {
            biased;
            () = cancelled(cancel) => return Err(HttpError::Cancelled),
            outcome = attempt(state.attempt) => outcome?,
        };

        match outcome {
            ResponseOutcome::Success(response) => return Ok(response),
            ResponseOutcome::Decode(e) => return Err(HttpError::Decode(e)),
            ResponseOutcome::Permanent(e) => return Err(HttpError::Response(e)),
            ResponseOutcome::RateLimited(e) => {
                if !state.can_retry() {
                    return Err(HttpError::RateLimited(e));
                }
                tracing::warn!(
                    attempt = state.attempt,
                    retry_after = e.retry_after.as_secs_f64(),
                    "Rate limited, retrying after advertised wait"
                );
                tokio::select! {
                    biased;
                    () = cancelled(cancel) => return Err(HttpError::Cancelled),
                    () = sleeper.sleep(e.retry_after) => {}
                }
            }
            ResponseOutcome::Transient(e) => {
                if !state.can_retry() {
                    return Err(HttpError::Transient(e));
                }
                tracing::warn!(
                    attempt = state.attempt,
                    "Service unavailable, retrying immediately"
                );
            }
        }

        state.advance();
    }
}

async fn cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::{RateLimitError, ResponseDecodingError, ResponseError};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSleeper {
        sleeps: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn sleeps(&self) -> Vec<Duration> {
            self.sleeps.lock().unwrap().clone()
        }
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
        }
    }

    fn error(code: u16) -> ResponseError {
        ResponseError {
            code,
            message: String::new(),
            errors: Vec::new(),
            request_id: None,
            warning: None,
        }
    }

    fn rate_limited(secs: u64) -> ResponseOutcome<u32> {
        ResponseOutcome::RateLimited(RateLimitError {
            error: error(429),
            retry_after: Duration::from_secs(secs),
        })
    }

    fn success(value: u32) -> ResponseOutcome<u32> {
        ResponseOutcome::Success(HttpResponse {
            code: 200,
            headers: HashMap::new(),
            body: value,
        })
    }

    /// Replays `outcomes` in order and records the attempt numbers seen.
    struct Script {
        outcomes: Mutex<VecDeque<Result<ResponseOutcome<u32>, HttpError>>>,
        attempts: Mutex<Vec<u32>>,
    }

    impl Script {
        fn new(outcomes: Vec<Result<ResponseOutcome<u32>, HttpError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                attempts: Mutex::new(Vec::new()),
            }
        }

        async fn next(&self, attempt: u32) -> Result<ResponseOutcome<u32>, HttpError> {
            self.attempts.lock().unwrap().push(attempt);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("script ran out of outcomes")
        }

        fn attempts(&self) -> Vec<u32> {
            self.attempts.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_retry_state_normalizes_budget() {
        assert_eq!(RetryState::new(0).attempts_remaining, 1);
        assert_eq!(RetryState::new(1).attempts_remaining, 1);
        assert!(!RetryState::new(0).can_retry());
        assert!(RetryState::new(2).can_retry());

        let mut state = RetryState::new(2);
        state.advance();
        assert_eq!(state, RetryState { attempts_remaining: 1, attempt: 2 });
        assert!(!state.can_retry());
    }

    #[tokio::test]
    async fn test_two_rate_limits_then_success_sleeps_twice() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(rate_limited(1)), Ok(rate_limited(1)), Ok(success(7))]);

        let response = execute(3, &sleeper, None, |n| script.next(n)).await.unwrap();

        assert_eq!(response.body, 7);
        assert_eq!(sleeper.sleeps(), vec![Duration::from_secs(1); 2]);
        assert_eq!(script.attempts(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_rate_limit_with_single_attempt_returns_without_sleeping() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(rate_limited(5))]);

        let result = execute(1, &sleeper, None, |n| script.next(n)).await;

        match result {
            Err(HttpError::RateLimited(e)) => assert_eq!(e.retry_after, Duration::from_secs(5)),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_rate_limit_exhausts_budget() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(rate_limited(2)), Ok(rate_limited(3))]);

        let result = execute(2, &sleeper, None, |n| script.next(n)).await;

        assert!(matches!(result, Err(HttpError::RateLimited(_))));
        assert_eq!(sleeper.sleeps(), vec![Duration::from_secs(2)]);
        assert_eq!(script.attempts(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_transient_with_single_attempt_returns_immediately() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(ResponseOutcome::Transient(error(503)))]);

        let result = execute(0, &sleeper, None, |n| script.next(n)).await;

        assert!(matches!(result, Err(HttpError::Transient(ResponseError { code: 503, .. }))));
        assert_eq!(script.attempts(), vec![1]);
    }

    #[tokio::test]
    async fn test_transient_retries_without_sleeping() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![
            Ok(ResponseOutcome::Transient(error(503))),
            Ok(ResponseOutcome::Transient(error(503))),
            Ok(success(1)),
        ]);

        let response = execute(3, &sleeper, None, |n| script.next(n)).await.unwrap();

        assert_eq!(response.body, 1);
        assert!(sleeper.sleeps().is_empty());
        assert_eq!(script.attempts(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_permanent_and_decode_are_never_retried() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(ResponseOutcome::Permanent(error(400)))]);
        let result = execute(5, &sleeper, None, |n| script.next(n)).await;
        assert!(matches!(result, Err(HttpError::Response(ResponseError { code: 400, .. }))));
        assert_eq!(script.attempts(), vec![1]);

        let script = Script::new(vec![Ok(ResponseOutcome::Decode(ResponseDecodingError {
            code: 200,
            body: b"nope".to_vec(),
            message: "expected value".to_string(),
        }))]);
        let result = execute(5, &sleeper, None, |n| script.next(n)).await;
        assert!(matches!(result, Err(HttpError::Decode(_))));
        assert_eq!(script.attempts(), vec![1]);
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_attempt_errors_are_terminal() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Err(HttpError::Cancelled)]);

        let result = execute(5, &sleeper, None, |n| script.next(n)).await;

        assert!(matches!(result, Err(HttpError::Cancelled)));
        assert_eq!(script.attempts(), vec![1]);
    }

    #[tokio::test]
    async fn test_cancelled_token_stops_before_first_attempt() {
        let sleeper = RecordingSleeper::default();
        let script = Script::new(vec![Ok(success(1))]);
        let token = CancellationToken::new();
        token.cancel();

        let result = execute(3, &sleeper, Some(&token), |n| script.next(n)).await;

        assert!(matches!(result, Err(HttpError::Cancelled)));
        assert!(script.attempts().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_during_backoff_aborts() {
        let token = CancellationToken::new();
        let script = Script::new(vec![Ok(rate_limited(3600)), Ok(success(1))]);

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = execute(3, &TokioSleeper, Some(&token), |n| script.next(n)).await;

        assert!(matches!(result, Err(HttpError::Cancelled)));
        assert_eq!(script.attempts(), vec![1]);
    }
}
