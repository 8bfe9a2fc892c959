/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Liveness probe payload from `/api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Navigation tree from `/api/menu-config`, keyed by section id.
pub type MenuConfig = HashMap<String, MenuSection>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::MenuConfig;

    #[test]
    fn menu_config_decodes() {
        let menu: MenuConfig = serde_json::from_str(
            r#"{
                "database": {
                    "title": "Database Tools",
                    "tools": [
                        {
                            "id": "adtn-catalog",
                            "name": "ADTN Catalog",
                            "icon": "fas fa-database",
                            "description": "Access the ADTN neutron star catalog"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(menu["database"].title, "Database Tools");
        assert_eq!(menu["database"].tools[0].id, "adtn-catalog");
    }
}
