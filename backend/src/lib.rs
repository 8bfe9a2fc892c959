/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

mod client;
mod error;
pub mod http;
pub mod menu;

pub use client::Client;
pub use error::{Error, Result};
pub use menu::{HealthStatus, MenuConfig, MenuSection, ToolEntry};
