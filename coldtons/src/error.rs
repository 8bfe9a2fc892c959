/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to read config file {0}: {1}")]
    ReadConfig(PathBuf, #[source] std::io::Error),
    #[error("unable to parse config file {0}: {1}")]
    ParseConfig(PathBuf, #[source] serde_json::Error),

    #[error("{0}")]
    Backend(#[from] backend::Error),
    #[error("{0}")]
    Catalog(#[from] catalog::Error),

    #[error("no parameters selected; use --param or --all")]
    EmptySelection,
    #[error("unknown parameter {0} (see the params subcommand)")]
    UnknownParameter(String),
}
