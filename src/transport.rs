//! The transport seam.
//!
//! The client never talks to the network directly; it hands prepared
//! requests to a [`Transport`]. Authentication, proxies and test doubles are
//! all implemented by supplying a different transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Request, Response};

/// Boxed error returned by transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const USER_AGENT: &str = concat!("ccv2/", env!("CARGO_PKG_VERSION"));

/// Performs HTTP requests.
///
/// Implementations must not interpret status codes; any response the server
/// produced is returned as `Ok`.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use ccv2::{BoxError, Transport};
///
/// /// Attaches a bearer token to every request.
/// struct Bearer {
///     inner: reqwest::Client,
///     token: String,
/// }
///
/// #[async_trait]
/// impl Transport for Bearer {
///     async fn execute(&self, mut request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
///         let value: reqwest::header::HeaderValue = format!("bearer {}", self.token).parse()?;
///         request.headers_mut().insert(reqwest::header::AUTHORIZATION, value);
///         Ok(self.inner.execute(request).await?)
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, BoxError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: Request) -> Result<Response, BoxError> {
        (**self).execute(request).await
    }
}

/// Build the stock, unauthenticated transport.
pub fn default_transport() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .brotli(true)
        .gzip(true)
        .deflate(true)
        .connect_timeout(Duration::from_secs(30))
        .build()
}
