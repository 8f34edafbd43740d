//! Organization model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::models::metadata::{Metadata, Resource};
use crate::models::space::Space;
use crate::query::{FilterField, Query};
use crate::traits::{Get, List};

/// A Cloud Foundry organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub metadata: Metadata,
    pub entity: OrganizationEntity,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationEntity {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub billing_enabled: bool,
    /// Accepts the historical misspelling `quota_definiton_guid` too.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(alias = "quota_definiton_guid")]
    pub quota_definition_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
}

impl Resource for Organization {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Organization {
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// List the spaces that belong to this organization.
    pub async fn spaces(&self, client: &Client, ctx: &Context) -> Result<Vec<Space>> {
        let query = Query::equal(FilterField::OrganizationGuid, self.guid());
        Space::list(client, ctx, &[query]).await
    }
}

impl List for Organization {
    const PATH: &'static str = "/v2/organizations";
}

impl Get for Organization {
    fn path(guid: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(guid))
    }
}
