//! Read-only Cloud Foundry Cloud Controller v2 API client.
//!
//! Builds requests against a base API URL, applies server-side filters,
//! walks paginated listings into single collections and turns non-success
//! responses into inspectable [`ApiError`]s.
//!
//! This crate does not authenticate. Supply a [`Transport`] that attaches
//! credentials (for example a `reqwest::Client` built with a default
//! `Authorization` header).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use ccv2::{Client, Context, FilterField, Get, List, Query, Resource, Space};
//!
//! #[tokio::main]
//! async fn main() -> ccv2::Result<()> {
//!     let client = Client::from_env()?;
//!     let ctx = Context::background().with_timeout(Duration::from_secs(30));
//!
//!     // Organizations named NASA
//!     let orgs = client
//!         .organizations(&ctx, &[Query::equal(FilterField::Name, "NASA")])
//!         .await?;
//!
//!     for org in &orgs {
//!         for space in org.spaces(&client, &ctx).await? {
//!             println!("{} / {}", org.name(), space.name());
//!         }
//!     }
//!
//!     // Single resources by GUID
//!     let space = Space::get(&client, &ctx, "2e100106-0b74-4062-8671-0d375f951cb4").await?;
//!     println!("{}", space.guid());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Client`] holds the base URL and the [`Transport`].
//! - [`List`] and [`Get`] are implemented by the resource types.
//! - Every call runs under a [`Context`] carrying an optional deadline and
//!   cancellation token.
//! - Errors are [`CcError`]s, classified by [`ErrorKind`] into transport,
//!   API and decode failures.
//!
//! # Configuration
//!
//! [`Client::from_env`] reads the base URL from `CCV2_API_URL`.

mod client;
mod context;
mod error;
mod models;
mod pagination;
mod query;
mod request;
mod response;
mod traits;
mod transport;

// Re-export core types
pub use client::{Client, API_URL_ENV};
pub use context::Context;
pub use error::{ApiError, CcError, ErrorKind, Result};
pub use pagination::{Page, DEFAULT_MAX_PAGES};
pub use query::{FilterField, Operator, Query};
pub use transport::{default_transport, BoxError, Transport};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    Application, ApplicationEntity, ApplicationSummary, Event, EventEntity, Info, Metadata,
    Organization, OrganizationEntity, Resource, Space, SpaceEntity,
};
