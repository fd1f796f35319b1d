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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. The sample clients use a generic builder type to provide such
//! functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use cloud_samples_gax_internal::client_builder::examples;
//! # use cloud_samples_gax_internal::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use google_cloud_auth::credentials::Credentials;

/// The result type for the client builders.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// The builder collects the client configuration and delegates the actual
/// construction to a service-specific factory.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Useful for private endpoints, emulators, and tests.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing of the requests sent by the client.
    ///
    /// Tracing is also enabled when the `GOOGLE_CLOUD_RUST_LOGGING`
    /// environment variable is set to `true`.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Without an explicit configuration the client uses
    /// [Application Default Credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(
            self,
            config: internal::ClientConfig,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub endpoint: Option<String>,
        pub cred: Option<Credentials>,
        pub tracing: bool,
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    use super::Result;
    use super::internal::ClientConfig;

    #[allow(dead_code)]
    pub struct Client(ClientConfig);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: ClientConfig) -> Result<Self> {
            Ok(Self(config))
        }
    }

    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(self, config: super::ClientConfig) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, PartialEq)]
    struct TestClient {
        endpoint: Option<String>,
        has_cred: bool,
        tracing: bool,
    }

    struct TestFactory;
    impl ClientFactory for TestFactory {
        type Client = TestClient;
        async fn build(self, config: ClientConfig) -> Result<Self::Client> {
            Ok(TestClient {
                endpoint: config.endpoint,
                has_cred: config.cred.is_some(),
                tracing: config.tracing,
            })
        }
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let client = new_builder(TestFactory).build().await?;
        assert_eq!(
            client,
            TestClient {
                endpoint: None,
                has_cred: false,
                tracing: false
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn with_settings() -> anyhow::Result<()> {
        let client = new_builder(TestFactory)
            .with_endpoint("http://localhost:8080")
            .with_tracing()
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        assert_eq!(
            client,
            TestClient {
                endpoint: Some("http://localhost:8080".to_string()),
                has_cred: true,
                tracing: true
            }
        );
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::cred("simulated problem");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("default credentials"), "{e}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::transport("simulated problem");
        assert!(!e.is_default_credentials(), "{e:?}");
        assert!(e.is_transport(), "{e:?}");
        assert!(e.to_string().contains("transport"), "{e}");
    }
}
