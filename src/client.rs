//! HTTP client for the Jenkins job-creation API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::config::UploadConfig;
use crate::contract::{CreateItemResponse, JobServer};

/// Transport-level failure: no usable HTTP response was received.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Talks to `POST {base_url}/createItem` with basic auth.
pub struct JenkinsClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    api_token: String,
}

impl JenkinsClient {
    pub fn new(config: &UploadConfig) -> Result<Self, ClientError> {
        // reqwest defaults apply: no request timeout is set.
        let http = reqwest::Client::builder()
            .user_agent(concat!("jenkins-onboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        tracing::info!(
            base_url = %config.server_url,
            user = %config.user,
            api_token_set = !config.api_token.is_empty(),
            "Initialized JenkinsClient"
        );
        Ok(JenkinsClient {
            http,
            base_url: config.server_url.clone(),
            user: config.user.clone(),
            api_token: config.api_token.clone(),
        })
    }

    /// Endpoint for job creation, without the query string.
    pub fn create_item_url(&self) -> String {
        format!("{}/createItem", self.base_url)
    }
}

#[async_trait]
impl JobServer for JenkinsClient {
    async fn create_item(
        &self,
        name: &str,
        config_xml: &[u8],
    ) -> Result<CreateItemResponse, ClientError> {
        let url = self.create_item_url();
        tracing::debug!(url = %url, job = name, bytes = config_xml.len(), "POST createItem");

        let response = self
            .http
            .post(&url)
            .query(&[("name", name)])
            .basic_auth(&self.user, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/xml")
            .body(config_xml.to_vec())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, job = name, "createItem request failed");
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(job = name, status, body_len = body.len(), "createItem responded");
        Ok(CreateItemResponse { status, body })
    }
}
