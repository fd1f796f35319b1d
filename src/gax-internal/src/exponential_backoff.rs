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

//! Truncated exponential backoff for polling loops.
//!
//! The delay before the `n`-th re-check of an operation is
//! `min(initial_delay * scaling^(n - 1), maximum_delay)`. No jitter is
//! applied, so the sequence of delays is deterministic.

use std::time::Duration;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Configures an [ExponentialBackoff].
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters: one second initial
    /// delay, doubling on each attempt, up to one minute.
    ///
    /// # Example
    /// ```
    /// # use cloud_samples_gax_internal::exponential_backoff::Error;
    /// # use cloud_samples_gax_internal::exponential_backoff::ExponentialBackoffBuilder;
    /// use std::time::Duration;
    ///
    /// let backoff = ExponentialBackoffBuilder::new()
    ///         .with_initial_delay(Duration::from_millis(100))
    ///         .with_maximum_delay(Duration::from_secs(5))
    ///         .with_scaling(4.0)
    ///         .build()?;
    /// assert_eq!(backoff.delay(2), Duration::from_millis(400));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates the backoff, validating the parameters.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
        })
    }

    /// Creates the backoff, clamping the parameters into their valid ranges.
    ///
    /// The maximum delay is clamped first, to `[1ms, 1 day]`. Then the initial
    /// delay is clamped to `[1ms, maximum_delay]`. Finally the scaling factor
    /// is clamped to `[1.0, 32.0]`. A configuration accepted by
    /// [build()][Self::build] and within these bounds is not changed.
    ///
    /// # Example
    /// ```
    /// # use cloud_samples_gax_internal::exponential_backoff::ExponentialBackoffBuilder;
    /// use std::time::Duration;
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::ZERO)
    ///     .with_maximum_delay(Duration::ZERO)
    ///     .with_scaling(0.0)
    ///     .clamp();
    /// assert_eq!(backoff.delay(1), Duration::from_millis(1));
    /// ```
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = self.scaling.clamp(1.0, 32.0);
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_millis(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncated exponential backoff without jitter.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    /// The delay to wait after the `attempt_count`-th attempt.
    ///
    /// `attempt_count` starts at 1. A value of 0 is treated as 1.
    pub fn delay(&self, attempt_count: u32) -> Duration {
        let exp = attempt_count.saturating_sub(1).min(i32::MAX as u32) as i32;
        let scaling = self.scaling.powi(exp);
        if !scaling.is_finite() || scaling >= self.maximum_delay.div_duration_f64(self.initial_delay)
        {
            return self.maximum_delay;
        }
        self.initial_delay.mul_f64(scaling).min(self.maximum_delay)
    }

    /// The delay before the first re-check.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// The upper bound for any delay.
    pub fn maximum_delay(&self) -> Duration {
        self.maximum_delay
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().clamp()
    }
}
