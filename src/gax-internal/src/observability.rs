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

//! Logging configuration shared by the sample clients and binaries.
//!
//! Library code emits [tracing] events and spans. The binaries install a
//! subscriber that writes them to stderr, keeping stdout for the sample
//! output.

use crate::client_builder::internal::ClientConfig;
use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;

/// Set this environment variable to `true` to enable verbose logging.
pub const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the client should log each request.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    logging_var_enabled()
}

/// Installs a global subscriber writing to stderr.
///
/// The subscriber logs at `INFO` level, or at `DEBUG` level when
/// [LOGGING_VAR] is set to `true`. Fails if a global subscriber is already
/// installed.
pub fn enable_tracing() -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(max_level()))
}

fn logging_var_enabled() -> bool {
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

fn max_level() -> Level {
    if logging_var_enabled() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn subscriber(max_level: Level) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let config = ClientConfig {
            tracing: true,
            ..ClientConfig::default()
        };
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    #[serial_test::serial]
    fn level_from_env() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        assert_eq!(max_level(), Level::INFO);
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        assert_eq!(max_level(), Level::DEBUG);
    }

    #[test]
    fn subscriber_levels() {
        let _guard = tracing::subscriber::set_default(subscriber(Level::INFO));
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));
    }
}
