//! Estate API client.

use anyhow::{bail, Context, Result};
use estate_core::{FlightResult, Plot, Tree, TreeStats};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Client for an estate server.
pub struct EstateClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct DronePlanQuery {
    max_distance: u64,
}

impl EstateClient {
    /// Create a new client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an estate. Returns its ID.
    pub async fn create_estate(&self, plot: Plot) -> Result<String> {
        let url = format!("{}/estate", self.base_url);
        let resp = self.client.post(&url).json(&plot).send().await?;
        let body: IdResponse = decode(resp, "create estate").await?;
        tracing::debug!("Created estate {}", body.id);
        Ok(body.id)
    }

    /// Plant a tree in an estate.
    pub async fn plant_tree(&self, estate_id: &str, tree: Tree) -> Result<()> {
        let url = format!("{}/estate/{}/tree", self.base_url, estate_id);
        let resp = self.client.post(&url).json(&tree).send().await?;
        let _: IdResponse = decode(resp, "plant tree").await?;
        Ok(())
    }

    /// Tree height statistics for an estate.
    pub async fn tree_stats(&self, estate_id: &str) -> Result<TreeStats> {
        let url = format!("{}/estate/{}/stats", self.base_url, estate_id);
        let resp = self.client.get(&url).send().await?;
        decode(resp, "tree stats").await
    }

    /// Drone plan for an estate, optionally bounded by `max_distance`.
    pub async fn drone_plan(
        &self,
        estate_id: &str,
        max_distance: Option<u64>,
    ) -> Result<FlightResult> {
        let url = format!("{}/estate/{}/drone-plan", self.base_url, estate_id);
        let mut request = self.client.get(&url);
        if let Some(max_distance) = max_distance {
            request = request.query(&DronePlanQuery { max_distance });
        }
        let resp = request.send().await?;
        decode(resp, "drone plan").await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response, action: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        bail!("{} failed: {} - {}", action, status, text);
    }
    resp.json()
        .await
        .with_context(|| format!("{}: unexpected response body", action))
}
