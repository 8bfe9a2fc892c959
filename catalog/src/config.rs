/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

use backend::http;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub http: http::Config,
}
