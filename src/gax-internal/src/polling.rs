// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded polling for asynchronous operations.
//!
//! Some services start work in the background and return a handle that
//! applications must re-check until the work is done. [poll_until_done]
//! implements that loop: it calls a status check, waits according to an
//! [ExponentialBackoff] while the operation is pending, and gives up after a
//! fixed number of attempts.
//!
//! An operation that *completes with an error* is not the same as an
//! operation that never completes. The former is returned as soon as it is
//! observed, the latter only once the attempt budget is exhausted.

use crate::exponential_backoff::ExponentialBackoff;
use std::time::Duration;

/// The outcome of a single status check.
#[derive(Clone, Debug, PartialEq)]
pub enum PollingStatus<T, E> {
    /// The operation is still running.
    Pending,
    /// The operation is done. The value may still describe a failed
    /// operation, it is up to the caller to inspect it.
    Complete(T),
    /// The status check itself failed. The loop stops immediately.
    Failed(E),
}

/// The error returned by [poll_until_done].
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PollingError<E> {
    #[error("the operation did not complete after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("the status check failed: {0}")]
    Failed(E),
}

impl<E> PollingError<E> {
    /// Returns true if the loop stopped because it ran out of attempts.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Controls how many times, and how often, an operation is checked.
///
/// # Example
/// ```
/// # use cloud_samples_gax_internal::polling::PollingPolicy;
/// # use cloud_samples_gax_internal::exponential_backoff::ExponentialBackoffBuilder;
/// use std::time::Duration;
/// let policy = PollingPolicy::new(5).with_backoff(
///     ExponentialBackoffBuilder::new()
///         .with_initial_delay(Duration::from_millis(500))
///         .clamp(),
/// );
/// assert_eq!(policy.maximum_attempts(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PollingPolicy {
    maximum_attempts: u32,
    backoff: ExponentialBackoff,
}

impl PollingPolicy {
    /// Creates a policy with the default backoff. A budget of zero attempts is
    /// treated as one attempt.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            maximum_attempts: maximum_attempts.max(1),
            backoff: ExponentialBackoff::default(),
        }
    }

    /// Changes the backoff between attempts.
    pub fn with_backoff(mut self, v: ExponentialBackoff) -> Self {
        self.backoff = v;
        self
    }

    pub fn maximum_attempts(&self) -> u32 {
        self.maximum_attempts
    }

    pub fn backoff(&self) -> &ExponentialBackoff {
        &self.backoff
    }
}

/// The number of status checks made by [PollingPolicy::default]: the initial
/// check plus ten re-checks.
pub const DEFAULT_MAXIMUM_ATTEMPTS: u32 = 11;

impl Default for PollingPolicy {
    /// Eleven attempts, starting with a one second delay and doubling up to
    /// one minute.
    fn default() -> Self {
        Self::new(DEFAULT_MAXIMUM_ATTEMPTS)
    }
}

/// Checks an operation until it completes, fails, or the policy is exhausted.
///
/// `check` receives the attempt number, starting at 1. `sleep` is called
/// between attempts, never before the first or after the last one. If the
/// operation completes on attempt `k` there are `k` checks and `k - 1`
/// sleeps.
pub async fn poll_until_done<T, E, C, S>(
    policy: &PollingPolicy,
    mut check: C,
    sleep: S,
) -> Result<T, PollingError<E>>
where
    C: AsyncFnMut(u32) -> PollingStatus<T, E>,
    S: AsyncFn(Duration) -> (),
{
    let mut attempt = 1;
    loop {
        match check(attempt).await {
            PollingStatus::Complete(v) => return Ok(v),
            PollingStatus::Failed(e) => return Err(PollingError::Failed(e)),
            PollingStatus::Pending if attempt >= policy.maximum_attempts => {
                tracing::debug!(attempt, "operation still pending, giving up");
                return Err(PollingError::Exhausted { attempts: attempt });
            }
            PollingStatus::Pending => {
                let delay = policy.backoff.delay(attempt);
                tracing::debug!(attempt, ?delay, "operation still pending");
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Same as [poll_until_done], sleeping with [tokio::time::sleep].
pub async fn poll_until_done_with_tokio<T, E, C>(
    policy: &PollingPolicy,
    check: C,
) -> Result<T, PollingError<E>>
where
    C: AsyncFnMut(u32) -> PollingStatus<T, E>,
{
    poll_until_done(policy, check, async |d: Duration| tokio::time::sleep(d).await).await
}
