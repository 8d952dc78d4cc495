//! Load orchestration: inline payloads, HTTP fetch, initial render

use crate::http::{HttpClient, HttpError};
use scholia_core::{ListController, Surface};
use scholia_domain::{GrantsPayload, PublicationsPayload};
use thiserror::Error;

/// Relative path of the publications resource.
pub const PUBLICATIONS_PATH: &str = "data/publications.json";
/// Relative path of the grants resource.
pub const GRANTS_PATH: &str = "data/grants_awards.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Invalid payload JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Loads the two site resources and triggers the initial renders.
///
/// An inline payload, when present, wins over the network: the host
/// embeds the JSON so the page also works from a local file. Each
/// resource is loaded exactly once per page lifetime; there is no
/// cancellation and no retry.
pub struct SiteLoader {
    client: HttpClient,
    base_url: String,
    inline_publications: Option<String>,
    inline_grants: Option<String>,
}

impl SiteLoader {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: HttpClient::default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            inline_publications: None,
            inline_grants: None,
        }
    }

    /// Builder method to supply the publications payload inline.
    pub fn with_inline_publications(mut self, json: String) -> Self {
        self.inline_publications = Some(json);
        self
    }

    /// Builder method to supply the grants payload inline.
    pub fn with_inline_grants(mut self, json: String) -> Self {
        self.inline_grants = Some(json);
        self
    }

    /// Obtain and parse the publications resource.
    pub async fn load_publications(&self) -> Result<PublicationsPayload, LoadError> {
        let json = self
            .resource_body(&self.inline_publications, PUBLICATIONS_PATH)
            .await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Obtain and parse the grants resource.
    pub async fn load_grants(&self) -> Result<GrantsPayload, LoadError> {
        let json = self.resource_body(&self.inline_grants, GRANTS_PATH).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Run both loads against a controller.
    ///
    /// Success populates the views; any failure is logged as a warning
    /// and leaves the pre-load empty state. Nothing escapes to the
    /// caller.
    pub async fn run<S: Surface>(&self, controller: &mut ListController<S>) {
        match self.load_publications().await {
            Ok(payload) => controller.install(payload.publications, payload.featured_ids),
            Err(e) => tracing::warn!("Could not load publications data: {e}"),
        }

        match self.load_grants().await {
            Ok(payload) => controller.show_grants(&payload.grants_awards),
            Err(e) => tracing::warn!("Could not load grants data: {e}"),
        }
    }

    async fn resource_body(
        &self,
        inline: &Option<String>,
        path: &str,
    ) -> Result<String, LoadError> {
        if let Some(json) = inline {
            return Ok(json.clone());
        }

        let url = format!("{}/{}", self.base_url, path);
        let response = self.client.get(&url).await?;
        if response.status != 200 {
            return Err(LoadError::Http(HttpError::BadStatus {
                status: response.status,
            }));
        }
        Ok(response.body)
    }
}
