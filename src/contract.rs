#![allow(unused)]

//! # contract: interface to the orchestration server
//!
//! The uploader only ever needs one remote operation: create a job from a
//! config document. It is expressed as the [`JobServer`] trait so the batch
//! logic in [`crate::upload`] can run against the real [`crate::client::JenkinsClient`]
//! or against a `mockall` mock in tests.
//!
//! Implementors hand back the raw status and body. Turning those into
//! created / already exists / failed is done by [`crate::upload::classify`].

use async_trait::async_trait;

use mockall::{automock, predicate::*};

use crate::client::ClientError;

/// What the server answered to a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemResponse {
    pub status: u16,
    pub body: String,
}

impl CreateItemResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for creating jobs on a remote orchestration server.
///
/// Implementors return `Err` only when no HTTP response was obtained at all
/// (connection refused, DNS failure, broken body). Any status code the
/// server sends back, including errors, is an `Ok` response.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait JobServer: Send + Sync {
    /// Create a new job named `name`. `config_xml` is sent unchanged as the
    /// request body.
    async fn create_item(
        &self,
        name: &str,
        config_xml: &[u8],
    ) -> Result<CreateItemResponse, ClientError>;
}
