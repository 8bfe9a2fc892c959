/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error creating client for the coldtons backend: {0}")]
    CreateClient(#[from] crate::http::Error),

    #[error("failed to send request to {}: {}", .0.url().unwrap(), .0)]
    SendRequest(#[source] reqwest::Error),
    #[error("failed to receive response from {}: {}", .0.url().unwrap(), .0)]
    ReceiveResponse(#[source] reqwest::Error),
    #[error("request to {0} failed {1}: {2}")]
    FailedRequest(String, StatusCode, String),
    #[error("failed to deserialize json: {0}")]
    DeserializeResponse(#[source] serde_json::Error),
}
