//! List trait for fetching collections of resources.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::pagination::{decode_resources, Page, PageEnvelope};
use crate::query::Query;
use crate::request::RequestOptions;

/// List resources of one kind, optionally filtered server-side.
///
/// Implementors only name their collection path; fetching, pagination and
/// decoding are shared.
///
/// # Example
///
/// ```ignore
/// use ccv2::{Client, Context, FilterField, List, Query, Space};
///
/// let ctx = Context::background();
///
/// // Every page
/// let spaces = Space::list(&client, &ctx, &[Query::equal(FilterField::Name, "rocket")]).await?;
///
/// // One page at a time
/// let mut page = Space::list_page(&client, &ctx, Space::PATH, &[]).await?;
/// while let Some(next) = page.next_url.clone() {
///     page = Space::list_page(&client, &ctx, &next, &[]).await?;
/// }
/// ```
#[async_trait]
pub trait List: DeserializeOwned + Send + Sized {
    /// Collection path, e.g. `/v2/organizations`.
    const PATH: &'static str;

    /// List every resource matching all `queries`, following pagination
    /// until the server stops handing out next-page locators.
    ///
    /// Resources come back in server order, page after page.
    ///
    /// # Errors
    ///
    /// Returns the first error of any page; records from earlier pages are
    /// discarded.
    #[tracing::instrument(skip(client, ctx))]
    async fn list(client: &Client, ctx: &Context, queries: &[Query]) -> Result<Vec<Self>> {
        let mut items = Vec::new();
        let opts = RequestOptions::get(Self::PATH, ctx).with_queries(queries);

        client
            .paginate(opts, |raw| {
                items.extend(decode_resources::<Self>(raw)?);
                Ok(())
            })
            .await?;

        Ok(items)
    }

    /// Fetch a single page.
    ///
    /// `locator` is [`Self::PATH`] for the first page, or a `next_url` /
    /// `prev_url` from an earlier page. `queries` are appended to the
    /// locator; pass none when following a server-supplied locator.
    #[tracing::instrument(skip(client, ctx))]
    async fn list_page(
        client: &Client,
        ctx: &Context,
        locator: &str,
        queries: &[Query],
    ) -> Result<Page<Self>> {
        let opts = RequestOptions::get(locator, ctx).with_queries(queries);
        let envelope: PageEnvelope = client
            .fetch(&opts, "page request", "page response decoding")
            .await?;
        Page::from_envelope(envelope)
    }
}
