/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::Display;

use log::{debug, trace, warn};
use reqwest::header::{self, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tap::{Pipe, TapFallible};

use crate::export::DownloadRequest;
use crate::heasarc::{DetailRequest, LinkableSet};
use crate::query::QueryPayload;
use crate::response::normalize;
use crate::table::ResultSet;
use crate::{Config, Error, Result};

/// Client for the ADTN catalog tool endpoints.
#[derive(Debug)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub async fn new(config: &Config) -> Result<Self> {
        let base_url = format!("{}/{}", config.http.base_url(None), "api");
        let (client, _) = config
            .http
            .create_client(vec![
                (header::ACCEPT, HeaderValue::from_static("application/json")),
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                ),
            ])
            .await?;

        Ok(Self {
            inner: client,
            base_url,
        })
    }

    async fn get(&self, endpoint: impl Display) -> Result<String> {
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

    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: impl Display,
    ) -> Result<T> {
        self.get(endpoint)
            .await?
            .as_str()
            .pipe(serde_json::from_str)
            .map_err(Error::DeserializeResponse)
    }

    async fn post(
        &self,
        endpoint: impl Display,
        body: &impl Serialize,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("posting to {url}");
        self.inner
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(Error::SendRequest)
    }

    /// Ordered parameter names from `/api/atnf-parameters`.
    pub async fn parameters(&self) -> Result<Vec<String>> {
        self.get_data("atnf-parameters").await
    }

    /// Identifiers with a HEASARC record, from `/api/heasarc-jnames`.
    pub async fn heasarc_jnames(&self) -> Result<LinkableSet> {
        self.get_data("heasarc-jnames").await
    }

    /// Raw catalog query response. The body is handed to the normalizer
    /// untouched; see [`crate::response::normalize`] for the shapes it
    /// may take.
    pub async fn query_raw(&self, payload: &QueryPayload) -> Result<String> {
        let response = self.post("tools/adtn-catalog/data", payload).await?;
        let status = response.status();
        let body = response.text().await.map_err(Error::ReceiveResponse)?;
        trace!("catalog data response: {body}");

        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::FailedRequest(
                format!("{}/tools/adtn-catalog/data", self.base_url),
                status,
                body,
            ))
        }
    }

    /// Run a catalog query and normalize the response into a table bound
    /// to the submitted columns.
    pub async fn query(&self, payload: &QueryPayload) -> Result<ResultSet> {
        self.query_raw(payload)
            .await
            .map(|body| normalize(&body, &payload.parameters))
            .tap_err(|e| warn!("catalog query failed: {e}"))
    }

    /// Request a serialized export of the given rows and columns. The
    /// backend is the sole authority on the output format; the returned
    /// bytes are opaque.
    pub async fn download(
        &self,
        request: &DownloadRequest<'_>,
    ) -> Result<Vec<u8>> {
        let response = self
            .post("tools/adtn-catalog/download", request)
            .await?
            .error_for_status()
            .map_err(|e| {
                Error::FailedRequest(
                    format!("{}/tools/adtn-catalog/download", self.base_url),
                    e.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    e.to_string(),
                )
            })?;
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(Error::ReceiveResponse)
    }

    /// HEASARC detail record for a single identifier. A 404 means the
    /// identifier has no record and is reported distinctly from other
    /// failures; the record schema is owned by the collaborator, so the
    /// payload stays an opaque document.
    pub async fn heasarc_detail(
        &self,
        jname: &str,
    ) -> Result<serde_json::Value> {
        let request = DetailRequest {
            jname: jname.to_string(),
        };
        let response = self.post("tools/adtn-catalog/heasarc", &request).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(jname.to_string()));
        }

        let body = response.text().await.map_err(Error::ReceiveResponse)?;
        if status.is_success() {
            serde_json::from_str(&body).map_err(Error::DeserializeResponse)
        } else {
            Err(Error::FailedRequest(
                format!("{}/tools/adtn-catalog/heasarc", self.base_url),
                status,
                body,
            ))
        }
    }
}
