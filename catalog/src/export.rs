/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::table::ResultRow;

/// The export formats offered by the download endpoint. Serialization is
/// entirely backend-side; the client only names the format and saves the
/// returned bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Csv, Self::Json, Self::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(format!(
                "unknown export format {other} (expected csv, json or xlsx)"
            )),
        }
    }
}

/// Wire payload for `POST /api/tools/adtn-catalog/download`.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadRequest<'a> {
    pub data: &'a [ResultRow],
    pub parameters: &'a [String],
    pub format: ExportFormat,
}

/// Local filename for a saved export: the catalog prefix plus the UTC
/// timestamp truncated to seconds, with colons replaced so the name is
/// portable.
pub fn export_filename(
    format: ExportFormat,
    timestamp: DateTime<Utc>,
) -> String {
    let timestamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .trim_end_matches('Z')
        .replace(':', "-");
    format!("atnf_catalog_{}.{}", timestamp, format.extension())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{export_filename, ExportFormat};

    #[test]
    fn filename_has_no_colons() {
        let timestamp = Utc.with_ymd_and_hms(2026, 8, 7, 12, 30, 5).unwrap();
        let name = export_filename(ExportFormat::Csv, timestamp);
        assert_eq!(name, "atnf_catalog_2026-08-07T12-30-05.csv");
        assert!(!name.contains(':'));
    }

    #[test]
    fn extension_follows_format() {
        let timestamp = Utc.with_ymd_and_hms(2026, 8, 7, 0, 0, 0).unwrap();
        assert!(export_filename(ExportFormat::Xlsx, timestamp)
            .ends_with(".xlsx"));
        assert!(export_filename(ExportFormat::Json, timestamp)
            .ends_with(".json"));
    }

    #[test]
    fn wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExportFormat::Xlsx).unwrap(),
            r#""xlsx""#
        );
    }
}
