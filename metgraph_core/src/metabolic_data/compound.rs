//! This module provides the compound struct representing a chemical compound

use derive_builder::Builder;

/// Represents a compound
///
/// Only the id takes part in graph construction, compounds are vertex labels.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compound {
    /// Used to identify the compound (must be unique)
    #[builder(setter(into))]
    pub id: String,
    /// Human readable name of the compound
    #[builder(default = "None")]
    pub name: Option<String>,
}

impl Compound {
    pub fn new(id: &str) -> Compound {
        Compound {
            id: id.to_string(),
            name: None,
        }
    }
}
