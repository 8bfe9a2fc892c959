/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The catalog's primary name key. Always part of a submitted query so
/// every result row can be identified and cross-referenced.
pub const IDENTIFIER_PARAM: &str = "JNAME";

/// The queryable parameter names, in the order served by
/// `/api/atnf-parameters`. Immutable for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCatalog(Vec<String>);

impl ParameterCatalog {
    pub fn new(parameters: Vec<String>) -> Self {
        Self(parameters)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, parameter: &str) -> bool {
        self.0.iter().any(|p| p == parameter)
    }

    /// The search-box view: case-insensitive substring match, catalog
    /// order preserved.
    pub fn filtered(&self, filter: &str) -> Vec<&str> {
        let filter = filter.to_lowercase();
        self.0
            .iter()
            .filter(|p| p.to_lowercase().contains(&filter))
            .map(String::as_str)
            .collect()
    }
}

/// User input for one catalog query: the raw comma-separated pulsar name
/// text and the chosen parameters in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySelection {
    pub name_filter: String,
    pub parameters: Vec<String>,
}

impl QuerySelection {
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Add the parameter to the selection, or remove it if present.
    pub fn toggle(&mut self, parameter: &str) {
        match self.parameters.iter().position(|p| p == parameter) {
            Some(idx) => {
                self.parameters.remove(idx);
            }
            None => self.parameters.push(parameter.to_string()),
        }
    }

    /// Select the filtered view of the catalog wholesale, or clear the
    /// selection when it already equals that view.
    pub fn select_all(&mut self, catalog: &ParameterCatalog, filter: &str) {
        let filtered = catalog.filtered(filter);
        if self.parameters == filtered {
            self.parameters.clear();
        } else {
            self.parameters =
                filtered.into_iter().map(str::to_string).collect();
        }
    }

    pub fn clear(&mut self) {
        self.name_filter.clear();
        self.parameters.clear();
    }

    /// Assemble the query payload. Name filters are split on commas,
    /// trimmed and dropped when empty; an empty list means "all pulsars"
    /// and is passed through as such. The identifier parameter leads the
    /// column list and is deduplicated if also chosen explicitly.
    pub fn payload(&self) -> QueryPayload {
        QueryPayload {
            pulsar_names: self
                .name_filter
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
            parameters: std::iter::once(IDENTIFIER_PARAM)
                .chain(self.parameters.iter().map(String::as_str))
                .unique()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Wire payload for `POST /api/tools/adtn-catalog/data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPayload {
    pub pulsar_names: Vec<String>,
    pub parameters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{ParameterCatalog, QuerySelection, IDENTIFIER_PARAM};

    fn catalog() -> ParameterCatalog {
        ParameterCatalog::new(
            ["JNAME", "RAJ", "DECJ", "P0", "DM"]
                .map(str::to_string)
                .to_vec(),
        )
    }

    #[test]
    fn identifier_is_prepended() {
        let selection = QuerySelection {
            name_filter: String::new(),
            parameters: vec!["P0".to_string(), "DM".to_string()],
        };
        assert_eq!(selection.payload().parameters, ["JNAME", "P0", "DM"]);
    }

    #[test]
    fn identifier_is_not_duplicated() {
        let selection = QuerySelection {
            name_filter: String::new(),
            parameters: ["P0", IDENTIFIER_PARAM, "DM"]
                .map(str::to_string)
                .to_vec(),
        };
        let parameters = selection.payload().parameters;
        assert_eq!(parameters, ["JNAME", "P0", "DM"]);
        assert_eq!(
            parameters.iter().filter(|p| *p == IDENTIFIER_PARAM).count(),
            1
        );
    }

    #[test]
    fn name_filters_are_trimmed_and_empties_dropped() {
        let selection = QuerySelection {
            name_filter: " J0534+2200 ,, J1939+2134 , ".to_string(),
            parameters: vec!["P0".to_string()],
        };
        assert_eq!(
            selection.payload().pulsar_names,
            ["J0534+2200", "J1939+2134"]
        );
    }

    #[test]
    fn blank_name_filter_means_all_pulsars() {
        let selection = QuerySelection {
            name_filter: "   ".to_string(),
            parameters: vec!["P0".to_string()],
        };
        assert!(selection.payload().pulsar_names.is_empty());
    }

    #[test]
    fn filter_is_case_insensitive() {
        assert_eq!(catalog().filtered("jn"), ["JNAME"]);
        assert_eq!(catalog().filtered("d"), ["DECJ", "DM"]);
    }

    #[test]
    fn select_all_follows_the_filtered_view() {
        let catalog = catalog();
        let mut selection = QuerySelection::default();

        selection.select_all(&catalog, "d");
        assert_eq!(selection.parameters, ["DECJ", "DM"]);

        // a second select-all over the same view clears it again
        selection.select_all(&catalog, "d");
        assert!(selection.parameters.is_empty());

        selection.select_all(&catalog, "");
        assert_eq!(selection.parameters.len(), catalog.len());
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut selection = QuerySelection::default();
        selection.toggle("P0");
        selection.toggle("DM");
        assert_eq!(selection.parameters, ["P0", "DM"]);
        selection.toggle("P0");
        assert_eq!(selection.parameters, ["DM"]);
    }
}
