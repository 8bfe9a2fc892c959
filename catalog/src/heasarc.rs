/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::ResultRow;

/// How the identifier column of a row should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// The identifier has a HEASARC record and can be followed.
    Interactive,
    /// Shown, but inert.
    Informational,
}

/// Identifiers eligible for the HEASARC detail lookup, as served by
/// `/api/heasarc-jnames`. Membership is exact string equality; catalog
/// identifiers are already canonical, so no case or whitespace
/// normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkableSet(HashSet<String>);

impl LinkableSet {
    pub fn new(jnames: HashSet<String>) -> Self {
        Self(jnames)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, jname: &str) -> bool {
        self.0.contains(jname)
    }

    pub fn link_mode(&self, row: &ResultRow) -> LinkMode {
        match row.identifier() {
            Some(jname) if self.0.contains(jname) => LinkMode::Interactive,
            _ => LinkMode::Informational,
        }
    }
}

impl FromIterator<String> for LinkableSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Wire payload for `POST /api/tools/adtn-catalog/heasarc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRequest {
    pub jname: String,
}

#[cfg(test)]
mod tests {
    use super::{LinkMode, LinkableSet};
    use crate::table::ResultRow;

    fn row(jname: &str) -> ResultRow {
        serde_json::from_str(&format!(r#"{{"JNAME": "{jname}"}}"#)).unwrap()
    }

    #[test]
    fn membership_decides_link_mode() {
        let set: LinkableSet =
            ["J0534+2200".to_string()].into_iter().collect();
        assert_eq!(set.link_mode(&row("J0534+2200")), LinkMode::Interactive);
        assert_eq!(
            set.link_mode(&row("J1939+2134")),
            LinkMode::Informational
        );
    }

    #[test]
    fn membership_is_case_sensitive() {
        let set: LinkableSet =
            ["J0534+2200".to_string()].into_iter().collect();
        assert_eq!(set.link_mode(&row("j0534+2200")), LinkMode::Informational);
    }

    #[test]
    fn rows_without_identifier_are_informational() {
        let set: LinkableSet =
            ["J0534+2200".to_string()].into_iter().collect();
        assert_eq!(
            set.link_mode(&ResultRow::default()),
            LinkMode::Informational
        );
    }
}
