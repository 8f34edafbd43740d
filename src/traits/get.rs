//! Get trait for fetching single resources.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::request::RequestOptions;

/// Fetch a single resource by GUID.
///
/// # Example
///
/// ```ignore
/// use ccv2::{Application, Context, Get};
///
/// let app = Application::get(&client, &Context::background(), "6064d98a-95e6-400b-bc03-be65e6d59622").await?;
/// ```
#[async_trait]
pub trait Get: DeserializeOwned + Send {
    /// Path of the resource identified by `guid`.
    fn path(guid: &str) -> String;

    /// Fetch the resource identified by `guid`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`](crate::ApiError) if the resource does not
    /// exist, or a transport/decode error if the request fails.
    #[tracing::instrument(skip(client, ctx))]
    async fn get(client: &Client, ctx: &Context, guid: &str) -> Result<Self> {
        let opts = RequestOptions::get(Self::path(guid), ctx);
        client.fetch(&opts, "get request", "resource decoding").await
    }
}
