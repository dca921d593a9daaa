use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;

/// A single action offered by an integration, with its declared default ports.
///
/// `input_ports`/`output_ports` are optional: an action that omits them gets
/// the resolver's defaults (`["main"]` in, `["main", "error"]` out).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSpec {
    pub key: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_ports: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_ports: Option<Vec<String>>,
}

/// A named group of actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

/// The read-only integration catalog, supplied once by the host at session
/// start. Order is the host's display order and is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    integrations: Vec<Integration>,
}

impl Catalog {
    pub fn new(integrations: Vec<Integration>) -> Self {
        Self { integrations }
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::JsonParseError(format!("Could not read '{}': {}", path, e)))?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    /// Look up an integration by name.
    pub fn integration(&self, name: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.name == name)
    }

    /// Look up an action by integration name and action key.
    pub fn action(&self, integration: &str, key: &str) -> Option<&ActionSpec> {
        self.integration(integration)?
            .actions
            .iter()
            .find(|a| a.key == key)
    }

    /// Every `(integration, action)` pair in catalog order, flattened for the
    /// host's browse panel.
    pub fn all_actions(&self) -> impl Iterator<Item = (&Integration, &ActionSpec)> {
        self.integrations
            .iter()
            .flat_map(|i| i.actions.iter().map(move |a| (i, a)))
    }

    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }
}
