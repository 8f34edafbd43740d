//! Cloud Controller API client.
//!
//! Holds the base URL and the transport, and implements the named listing
//! and fetch operations. Generic list/get behavior lives in the traits on
//! the model types.

use std::env;
use std::sync::Arc;

use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::context::Context;
use crate::error::{CcError, Result};
use crate::models::{Application, ApplicationSummary, Event, Info, Organization, Resource, Space};
use crate::pagination::DEFAULT_MAX_PAGES;
use crate::query::Query;
use crate::request::RequestOptions;
use crate::response::decode_response;
use crate::traits::{Get, List};
use crate::transport::{default_transport, Transport};

/// Environment variable holding the API base URL for [`Client::from_env`].
pub const API_URL_ENV: &str = "CCV2_API_URL";

/// Read-only Cloud Controller v2 client.
///
/// The client never authenticates on its own: supply a [`Transport`] that
/// attaches credentials. Configuration is read-only after construction and
/// clones share the same transport, so one client can serve concurrent
/// calls.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use ccv2::{Client, Context, FilterField, Query};
///
/// # async fn example() -> ccv2::Result<()> {
/// let client = Client::new("https://api.bosh-lite.com")?;
/// let ctx = Context::background().with_timeout(Duration::from_secs(5));
///
/// let info = client.info(&ctx).await?;
/// println!("token endpoint: {}", info.token_endpoint);
///
/// let orgs = client
///     .organizations(&ctx, &[Query::equal(FilterField::Name, "NASA")])
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    base_url: Arc<Url>,
    max_pages: u32,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client from the environment.
    ///
    /// Reads the base URL from `CCV2_API_URL` and uses the default,
    /// unauthenticated transport.
    ///
    /// # Errors
    ///
    /// Returns an error if `CCV2_API_URL` is unset or invalid.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_ENV).map_err(|_| {
            CcError::ConfigMissing(format!("{API_URL_ENV} environment variable not set"))
        })?;
        Self::new(&base_url)
    }

    /// Create a client using the default, unauthenticated transport.
    ///
    /// Enough for `/v2/info`; everything else needs
    /// [`Client::with_transport`].
    pub fn new(base_url: &str) -> Result<Self> {
        let transport = default_transport().map_err(|e| CcError::Transport {
            operation: "transport setup",
            source: e.into(),
        })?;
        Self::with_transport(base_url, transport)
    }

    /// Create a client that sends every request through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_transport<T: Transport + 'static>(base_url: &str, transport: T) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|source| CcError::InvalidUrl {
            path: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            transport: Arc::new(transport),
            base_url: Arc::new(base_url),
            max_pages: DEFAULT_MAX_PAGES,
        })
    }

    /// Cap the number of pages a single listing may follow.
    ///
    /// The cap is at least one page; `0` is treated as `1`.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the transport requests are sent through.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Get the page cap for listings.
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Build and send one request under the options' context.
    pub(crate) async fn send(&self, opts: &RequestOptions, operation: &'static str) -> Result<Response> {
        let request = opts.build(&self.base_url)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "{operation}");

        opts.context
            .run(operation, self.transport.execute(request))
            .await?
            .map_err(|source| CcError::Transport { operation, source })
    }

    /// Send one request and decode a `200 OK` body as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        opts: &RequestOptions,
        operation: &'static str,
        decoding: &'static str,
    ) -> Result<T> {
        let response = self.send(opts, operation).await?;
        decode_response(response, &opts.context, operation, decoding).await
    }

    /// Fetch the `/v2/info` document.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn info(&self, ctx: &Context) -> Result<Info> {
        let opts = RequestOptions::get("/v2/info", ctx);
        self.fetch(&opts, "info request", "info response decoding")
            .await
    }

    /// List all organizations matching every query.
    pub async fn organizations(&self, ctx: &Context, queries: &[Query]) -> Result<Vec<Organization>> {
        Organization::list(self, ctx, queries).await
    }

    /// List all spaces matching every query.
    pub async fn spaces(&self, ctx: &Context, queries: &[Query]) -> Result<Vec<Space>> {
        Space::list(self, ctx, queries).await
    }

    /// List all applications matching every query.
    pub async fn applications(&self, ctx: &Context, queries: &[Query]) -> Result<Vec<Application>> {
        Application::list(self, ctx, queries).await
    }

    /// List all events matching every query.
    pub async fn events(&self, ctx: &Context, queries: &[Query]) -> Result<Vec<Event>> {
        Event::list(self, ctx, queries).await
    }

    /// Fetch the summary of `app`.
    pub async fn application_summary(
        &self,
        ctx: &Context,
        app: &Application,
    ) -> Result<ApplicationSummary> {
        ApplicationSummary::get(self, ctx, app.guid()).await
    }
}
