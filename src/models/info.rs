//! The `/v2/info` document.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Cloud Controller deployment information.
///
/// Served without authentication; the endpoints it lists are where a caller
/// obtains tokens for an authenticated transport.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub build: String,
    #[serde_as(as = "DefaultOnNull")]
    pub support: String,
    #[serde_as(as = "DefaultOnNull")]
    pub version: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,

    #[serde_as(as = "DefaultOnNull")]
    pub min_cli_version: String,
    #[serde_as(as = "DefaultOnNull")]
    pub min_recommended_cli_version: String,
    #[serde_as(as = "DefaultOnNull")]
    pub api_version: String,

    #[serde_as(as = "DefaultOnNull")]
    pub app_ssh_endpoint: String,
    #[serde_as(as = "DefaultOnNull")]
    pub app_ssh_host_key_fingerprint: String,
    #[serde_as(as = "DefaultOnNull")]
    pub app_ssh_oauth_client: String,
    #[serde_as(as = "DefaultOnNull")]
    pub authorization_endpoint: String,
    #[serde_as(as = "DefaultOnNull")]
    pub token_endpoint: String,
    #[serde_as(as = "DefaultOnNull")]
    pub routing_endpoint: String,
    #[serde_as(as = "DefaultOnNull")]
    pub logging_endpoint: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "doppler_logging_endpoint")]
    pub doppler_endpoint: String,
}
