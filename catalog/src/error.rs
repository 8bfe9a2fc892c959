/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error creating client for the catalog backend: {0}")]
    CreateClient(#[from] backend::http::Error),

    #[error("failed to send request to {}: {}", .0.url().unwrap(), .0)]
    SendRequest(#[source] reqwest::Error),
    #[error("failed to receive response from {}: {}", .0.url().unwrap(), .0)]
    ReceiveResponse(#[source] reqwest::Error),
    #[error("request to {0} failed {1}: {2}")]
    FailedRequest(String, StatusCode, String),
    #[error("failed to deserialize json: {0}")]
    DeserializeResponse(#[source] serde_json::Error),

    #[error("no HEASARC record for {0}")]
    NotFound(String),

    #[error("a query is already in flight")]
    QueryInFlight,
    #[error("no query results to export")]
    NoResults,
    #[error("unable to write export file {0}: {1}")]
    WriteFile(PathBuf, #[source] std::io::Error),
}
