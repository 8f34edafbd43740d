//! Space model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::models::application::Application;
use crate::models::metadata::{Metadata, Resource};
use crate::query::{FilterField, Query};
use crate::traits::{Get, List};

/// A Cloud Foundry space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub metadata: Metadata,
    pub entity: SpaceEntity,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceEntity {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub organization_guid: String,
    /// Empty when no space quota is assigned. Accepts the historical
    /// misspelling `space_quota_definiton_guid` too.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(alias = "space_quota_definiton_guid")]
    pub space_quota_definition_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub allow_ssh: bool,
}

impl Resource for Space {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Space {
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// List the applications deployed to this space.
    pub async fn applications(&self, client: &Client, ctx: &Context) -> Result<Vec<Application>> {
        let query = Query::equal(FilterField::SpaceGuid, self.guid());
        Application::list(client, ctx, &[query]).await
    }
}

impl List for Space {
    const PATH: &'static str = "/v2/spaces";
}

impl Get for Space {
    fn path(guid: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(guid))
    }
}
