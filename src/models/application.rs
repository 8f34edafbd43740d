//! Application and application summary models.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::models::event::Event;
use crate::models::metadata::{Metadata, Resource};
use crate::query::{FilterField, Query};
use crate::traits::{Get, List};

/// A Cloud Foundry application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub metadata: Metadata,
    pub entity: ApplicationEntity,
}

/// Application attributes as listed under `/v2/apps`.
///
/// Memory and disk quota are in megabytes.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationEntity {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub space_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub stack_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub memory: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub instances: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub disk_quota: i64,
    /// `STARTED` or `STOPPED`.
    #[serde_as(as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub version: String,
    /// `PENDING`, `STAGED` or `FAILED`.
    #[serde_as(as = "DefaultOnNull")]
    pub package_state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub health_check_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub health_check_timeout: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub buildpack: String,
    #[serde_as(as = "DefaultOnNull")]
    pub command: String,
    #[serde_as(as = "DefaultOnNull")]
    pub detected_buildpack: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "detected_start_command")]
    pub detected_command: String,
    #[serde_as(as = "DefaultOnNull")]
    pub diego: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub enable_ssh: bool,
}

impl Resource for Application {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Application {
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn is_started(&self) -> bool {
        self.entity.state == "STARTED"
    }

    /// Fetch the summary of this application.
    pub async fn summary(&self, client: &Client, ctx: &Context) -> Result<ApplicationSummary> {
        ApplicationSummary::get(client, ctx, self.guid()).await
    }

    /// List events whose actee is this application, narrowed by `queries`.
    pub async fn events(
        &self,
        client: &Client,
        ctx: &Context,
        queries: &[Query],
    ) -> Result<Vec<Event>> {
        let mut all = Vec::with_capacity(queries.len() + 1);
        all.push(Query::equal(FilterField::Actee, self.guid()));
        all.extend_from_slice(queries);
        Event::list(client, ctx, &all).await
    }
}

impl List for Application {
    const PATH: &'static str = "/v2/apps";
}

impl Get for Application {
    fn path(guid: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(guid))
    }
}

/// Summary of an application, served by `/v2/apps/:guid/summary`.
///
/// Flat, unlike the listed [`Application`], and carries the number of
/// running instances.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSummary {
    #[serde_as(as = "DefaultOnNull")]
    pub guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub space_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub stack_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub memory: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub instances: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub disk_quota: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub version: String,
    #[serde_as(as = "DefaultOnNull")]
    pub package_state: String,
    #[serde_as(as = "DefaultOnNull")]
    pub health_check_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub health_check_timeout: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub buildpack: String,
    #[serde_as(as = "DefaultOnNull")]
    pub command: String,
    #[serde_as(as = "DefaultOnNull")]
    pub detected_buildpack: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "detected_start_command")]
    pub detected_command: String,
    #[serde_as(as = "DefaultOnNull")]
    pub diego: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub enable_ssh: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub running_instances: i64,
}

impl Get for ApplicationSummary {
    fn path(guid: &str) -> String {
        format!("{}/{}/summary", Application::PATH, urlencoding::encode(guid))
    }
}
