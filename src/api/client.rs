use std::future::Future;
use std::time::Duration;

use crate::api::ApiError;
use reqwest::{Error, Response};
use spdlog::prelude::*;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("bad url: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("api error: {0}")]
    ApiError(#[from] ApiError),

    #[error("reqwest error: {0}")]
    ReqwestError(#[from] Error),
}

/// Capability to download a document over the network.
pub trait Transport {
    /// Performs a GET on `url` and returns the whole response body.
    fn get(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, ClientError>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new() -> Self {
        ApiClient {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ApiClient { client })
    }

    async fn handle_response(&self, response: Response) -> Result<Vec<u8>, ClientError> {
        let status = response.status();
        let url = response.url().to_string();
        // always drain the body so the connection goes back to the pool
        let body = response.bytes().await?;

        if status.is_client_error() || status.is_server_error() {
            return Err(ClientError::ApiError(ApiError::new(status, url)));
        }

        Ok(body.to_vec())
    }
}

impl Transport for ApiClient {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, ClientError> {
        debug!("GET {}", url);
        let res = self.client.get(url.clone()).send().await?;
        self.handle_response(res).await
    }
}
