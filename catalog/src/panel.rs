/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

use crate::export::{export_filename, DownloadRequest, ExportFormat};
use crate::heasarc::{LinkMode, LinkableSet};
use crate::query::{ParameterCatalog, QuerySelection};
use crate::table::{ResultRow, ResultSet};
use crate::{Client, Config, Error, Result};

/// Lifecycle of a single query. `Querying` is entered only on explicit
/// user action; the other states are terminal until the next submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Idle,
    Querying,
    Populated,
    Empty,
    Failed,
}

/// The interface boundary of a workspace tool panel.
#[async_trait]
pub trait ToolPanel {
    /// Fetch the session-immutable inputs the panel needs.
    async fn load(&mut self) -> Result<()>;

    /// Submit the current selection and replace the result set with the
    /// outcome. Returns the terminal state of the lifecycle.
    async fn submit_query(&mut self) -> Result<PanelState>;

    /// Export the current results through the backend converter and
    /// save the returned bytes under `out_dir`.
    async fn export_as(
        &mut self,
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<PathBuf>;
}

/// The ADTN catalog panel. Owns its own client, selection and result
/// set; a failure here never affects other panels.
pub struct CatalogPanel {
    client: Client,
    catalog: ParameterCatalog,
    linkable: LinkableSet,
    selection: QuerySelection,
    state: PanelState,
    results: ResultSet,
}

impl CatalogPanel {
    pub async fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config).await?,
            catalog: ParameterCatalog::default(),
            linkable: LinkableSet::default(),
            selection: QuerySelection::default(),
            state: PanelState::default(),
            results: ResultSet::default(),
        })
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selection(&self) -> &QuerySelection {
        &self.selection
    }

    pub fn set_name_filter(&mut self, names: &str) {
        self.selection.name_filter = names.to_string();
    }

    pub fn toggle_parameter(&mut self, parameter: &str) {
        self.selection.toggle(parameter);
    }

    pub fn select_all(&mut self, filter: &str) {
        self.selection.select_all(&self.catalog, filter);
    }

    pub fn link_mode(&self, row: &ResultRow) -> LinkMode {
        self.linkable.link_mode(row)
    }

    pub async fn heasarc_detail(
        &self,
        jname: &str,
    ) -> Result<serde_json::Value> {
        self.client.heasarc_detail(jname).await
    }
}

#[async_trait]
impl ToolPanel for CatalogPanel {
    async fn load(&mut self) -> Result<()> {
        self.catalog = ParameterCatalog::new(self.client.parameters().await?);
        debug!("loaded {} catalog parameters", self.catalog.len());

        // without the linkable set every row renders informational
        self.linkable = match self.client.heasarc_jnames().await {
            Ok(jnames) => jnames,
            Err(e) => {
                warn!("could not fetch HEASARC identifiers: {e}");
                LinkableSet::default()
            }
        };
        Ok(())
    }

    async fn submit_query(&mut self) -> Result<PanelState> {
        if self.state == PanelState::Querying {
            return Err(Error::QueryInFlight);
        }

        // prior results are cleared before the request resolves
        self.state = PanelState::Querying;
        self.results = ResultSet::default();

        let payload = self.selection.payload();
        info!(
            "querying catalog for {} pulsars, {} parameters",
            payload.pulsar_names.len(),
            payload.parameters.len()
        );
        let outcome = self.client.query(&payload).await;
        self.selection.clear();

        match outcome {
            Ok(results) => {
                self.state = match results.is_empty() {
                    true => PanelState::Empty,
                    false => PanelState::Populated,
                };
                self.results = results;
                Ok(self.state)
            }
            Err(e) => {
                self.state = PanelState::Failed;
                self.results = ResultSet::default();
                Err(e)
            }
        }
    }

    async fn export_as(
        &mut self,
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<PathBuf> {
        if self.results.is_empty() {
            return Err(Error::NoResults);
        }

        let request = DownloadRequest {
            data: &self.results.rows,
            parameters: &self.results.columns,
            format,
        };
        let bytes = self.client.download(&request).await?;

        let path = out_dir.join(export_filename(format, Utc::now()));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| Error::WriteFile(path.clone(), e))?;
        info!("saved {} export to {}", format, path.display());
        Ok(path)
    }
}
