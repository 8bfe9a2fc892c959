/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod client;
mod config;
mod error;
pub mod export;
pub mod heasarc;
pub mod panel;
pub mod query;
pub mod response;
pub mod table;

pub use client::Client;
pub use config::Config;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use heasarc::{LinkMode, LinkableSet};
pub use panel::{CatalogPanel, PanelState, ToolPanel};
pub use query::{ParameterCatalog, QueryPayload, QuerySelection};
pub use table::{CellValue, ResultRow, ResultSet};
