//! Pagination over Cloud Controller list envelopes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::client::Client;
use crate::error::{CcError, Result};
use crate::request::RequestOptions;

/// Default upper bound on the number of pages a single listing follows.
pub const DEFAULT_MAX_PAGES: u32 = 10_000;

/// The list envelope as sent by the server.
///
/// `resources` stays raw; the caller decides what it holds.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    pub resources: Box<RawValue>,
}

impl PageEnvelope {
    /// The next-page locator, if any. Empty strings mean "no more pages".
    pub fn next_locator(&self) -> Option<&str> {
        self.next_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Decode a raw `resources` array into records.
pub(crate) fn decode_resources<T: DeserializeOwned>(raw: &RawValue) -> Result<Vec<T>> {
    serde_json::from_str(raw.get()).map_err(CcError::decode("decoding page resources"))
}

/// A single page of results.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The records on this page, in server order.
    pub resources: Vec<T>,
    /// Locator of the following page.
    pub next_url: Option<String>,
    /// Locator of the preceding page.
    pub prev_url: Option<String>,
    /// Total number of records across all pages, if reported.
    pub total_results: Option<u64>,
    /// Total number of pages, if reported.
    pub total_pages: Option<u64>,
}

impl<T> Page<T> {
    pub(crate) fn from_envelope(envelope: PageEnvelope) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let resources = decode_resources(&envelope.resources)?;
        let next_url = envelope.next_locator().map(str::to_string);
        Ok(Self {
            resources,
            next_url,
            prev_url: envelope.prev_url.filter(|url| !url.is_empty()),
            total_results: envelope.total_results,
            total_pages: envelope.total_pages,
        })
    }

    /// Whether the server pointed at another page.
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Map the records to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            resources: self.resources.into_iter().map(f).collect(),
            next_url: self.next_url,
            prev_url: self.prev_url,
            total_results: self.total_results,
            total_pages: self.total_pages,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.resources.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

impl Client {
    /// Walk every page starting at `opts`, handing each page's raw
    /// `resources` to `on_page`.
    ///
    /// Stops after the first page without a next-page locator. The first
    /// failure of any step, including `on_page`, ends the walk.
    pub(crate) async fn paginate<F>(&self, mut opts: RequestOptions, mut on_page: F) -> Result<()>
    where
        F: FnMut(&RawValue) -> Result<()> + Send,
    {
        let limit = self.max_pages();
        let mut fetched = 0u32;

        loop {
            if fetched >= limit {
                tracing::warn!(limit, path = %opts.path, "pagination limit reached");
                return Err(CcError::PageLimitExceeded { limit });
            }

            let envelope: PageEnvelope = self
                .fetch(&opts, "page request", "page response decoding")
                .await?;
            fetched += 1;

            on_page(&envelope.resources)?;

            match envelope.next_locator() {
                Some(next) => {
                    tracing::debug!(page = fetched, next, "following next page");
                    opts.follow(next);
                }
                None => {
                    tracing::debug!(pages = fetched, "pagination complete");
                    return Ok(());
                }
            }
        }
    }
}
