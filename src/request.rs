//! Request construction.

use reqwest::{Method, Request};
use url::Url;

use crate::context::Context;
use crate::error::{CcError, Result};
use crate::query::Query;

/// Describes one request before it is resolved against the base URL.
///
/// Built fresh for every call; the paginator rewrites `path` as it follows
/// next-page locators.
#[derive(Debug, Clone)]
pub(crate) struct RequestOptions {
    pub method: Method,
    /// Relative path or absolute URL.
    pub path: String,
    pub queries: Vec<Query>,
    pub body: Option<Vec<u8>>,
    pub context: Context,
}

impl RequestOptions {
    pub fn get(path: impl Into<String>, context: &Context) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            queries: Vec::new(),
            body: None,
            context: context.clone(),
        }
    }

    pub fn with_queries(mut self, queries: &[Query]) -> Self {
        self.queries.extend_from_slice(queries);
        self
    }

    /// Point the options at a server-supplied next-page locator.
    ///
    /// The locator already carries the filters of the original request.
    pub fn follow(&mut self, locator: &str) {
        self.path = locator.to_string();
        self.queries.clear();
    }

    /// Resolve against `base` and produce a transport-ready request.
    pub fn build(&self, base: &Url) -> Result<Request> {
        let mut url = base.join(&self.path).map_err(|source| CcError::InvalidUrl {
            path: self.path.clone(),
            source,
        })?;

        if !self.queries.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for query in &self.queries {
                pairs.append_pair("q", &query.to_string());
            }
        }

        let mut request = Request::new(self.method.clone(), url);
        if let Some(body) = &self.body {
            *request.body_mut() = Some(body.clone().into());
        }
        Ok(request)
    }
}
