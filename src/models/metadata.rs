//! Metadata shared by every Cloud Controller resource.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// The `metadata` block of a resource.
///
/// Timestamps are kept exactly as the API sends them.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde_as(as = "DefaultOnNull")]
    pub guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
}

/// A resource that carries a [`Metadata`] block.
pub trait Resource {
    fn metadata(&self) -> &Metadata;

    fn guid(&self) -> &str {
        &self.metadata().guid
    }
}
