//! Module providing JSON snapshot loading for in-memory data providers
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::metabolic_data::compound::Compound;
use crate::metabolic_data::pathway::PathwayRecord;
use crate::metabolic_data::provider::InMemoryProvider;
use crate::metabolic_data::reaction::ReactionRecord;

// region JSON Snapshot
/// Represents a JSON snapshot of compound, reaction, and pathway records
#[derive(Serialize, Deserialize)]
struct JsonSnapshot {
    #[serde(default)]
    compounds: Vec<JsonCompound>,
    #[serde(default)]
    reactions: Vec<JsonReaction>,
    #[serde(default)]
    pathways: Vec<JsonPathway>,
}

#[derive(Serialize, Deserialize)]
struct JsonCompound {
    id: String,
    name: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonReaction {
    id: String,
    name: Option<String>,
    #[serde(default)]
    left: Vec<String>,
    #[serde(default)]
    right: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonPathway {
    id: String,
    name: Option<String>,
    #[serde(default, alias = "reaction_list")]
    members: Vec<String>,
    /// Left as raw JSON, since the species lists in the source data aren't always lists
    #[serde(default, alias = "species")]
    organisms: Option<Value>,
}
// endregion JSON Snapshot

// region Conversions
impl From<JsonCompound> for Compound {
    fn from(c: JsonCompound) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

impl From<JsonReaction> for ReactionRecord {
    fn from(r: JsonReaction) -> Self {
        Self {
            id: r.id,
            left: r.left,
            right: r.right,
            name: r.name,
        }
    }
}

impl From<JsonPathway> for PathwayRecord {
    fn from(p: JsonPathway) -> Self {
        let organisms = organism_list(&p.id, p.organisms);
        Self {
            id: p.id,
            members: p.members,
            organisms,
            name: p.name,
        }
    }
}

/// Interpret a raw species field, anything other than an array of strings counts as missing
fn organism_list(pathway_id: &str, value: Option<Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(entries) => {
            let organisms: Option<Vec<String>> = entries
                .into_iter()
                .map(|entry| match entry {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect();
            if organisms.is_none() {
                warn!(pathway = pathway_id, "Ignoring species list with non-string entries");
            }
            organisms
        }
        Value::Null => None,
        other => {
            warn!(pathway = pathway_id, species = %other, "Ignoring malformed species field");
            None
        }
    }
}

impl InMemoryProvider {
    /// Load a provider from a JSON snapshot file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<InMemoryProvider, JsonError> {
        let snapshot_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        InMemoryProvider::from_json_str(&snapshot_str)
    }

    /// Load a provider from the text of a JSON snapshot
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::metabolic_data::provider::{DataProvider, InMemoryProvider};
    /// let provider = InMemoryProvider::from_json_str(
    ///     r#"{"reactions": [{"id": "RXN-A", "left": ["X"], "right": ["Y"]}]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(provider.reaction("RXN-A").unwrap().right, vec!["Y".to_string()]);
    /// ```
    pub fn from_json_str(snapshot_str: &str) -> Result<InMemoryProvider, JsonError> {
        let snapshot = match serde_json::from_str::<JsonSnapshot>(snapshot_str) {
            Ok(snapshot) => snapshot,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Ok(InMemoryProvider::from_json(snapshot))
    }

    fn from_json(snapshot: JsonSnapshot) -> Self {
        let mut provider = InMemoryProvider::new();
        snapshot
            .compounds
            .into_iter()
            .for_each(|c| provider.add_compound(Compound::from(c)));
        snapshot
            .reactions
            .into_iter()
            .for_each(|r| provider.add_reaction(ReactionRecord::from(r)));
        snapshot
            .pathways
            .into_iter()
            .for_each(|p| provider.add_pathway(PathwayRecord::from(p)));
        debug!(
            compounds = provider.num_compounds(),
            reactions = provider.num_reactions(),
            pathways = provider.num_pathways(),
            "Loaded JSON snapshot"
        );
        provider
    }
}

// endregion Conversions

// region Errors
#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
}
// endregion Errors
