/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::Display;

use log::{debug, trace};
use reqwest::header::{self, HeaderValue};
use serde::de::DeserializeOwned;
use tap::Pipe;

use crate::http;
use crate::menu::{HealthStatus, MenuConfig};
use crate::{Error, Result};

/// Client for the shell-level endpoints of the ColDToNs backend.
#[derive(Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub async fn new(config: &http::Config) -> Result<Self> {
        let base_url = format!("{}/{}", config.base_url(None), "api");
        let (client, _) = config
            .create_client(vec![(
                header::ACCEPT,
                HeaderValue::from_static("application/json"),
            )])
            .await?;

        Ok(Self {
            inner: client,
            base_url,
        })
    }

    async fn request(&self, endpoint: impl Display) -> Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("requesting {url}");
        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(Error::SendRequest)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::ReceiveResponse)?;
        trace!("response from endpoint {endpoint}: {body}");

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::FailedRequest(url, status, body))
        }
    }

    async fn request_data<T: DeserializeOwned>(
        &self,
        endpoint: impl Display,
    ) -> Result<T> {
        self.request(endpoint)
            .await?
            .as_str()
            .pipe(serde_json::from_str)
            .map_err(Error::DeserializeResponse)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.request_data("health").await
    }

    pub async fn menu_config(&self) -> Result<MenuConfig> {
        self.request_data("menu-config").await
    }
}
