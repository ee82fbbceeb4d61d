//! This module provides a struct for representing reaction records

use derive_builder::Builder;

/// Represents a reaction, as a transformation of left side compounds into right side compounds
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord {
    /// Used to identify the reaction
    #[builder(setter(into))]
    pub id: String,
    /// Ids of the compounds consumed by the reaction, in source order
    #[builder(default = "Vec::new()")]
    pub left: Vec<String>,
    /// Ids of the compounds produced by the reaction, in source order
    #[builder(default = "Vec::new()")]
    pub right: Vec<String>,
    /// Human-readable reaction name
    #[builder(default = "None")]
    pub name: Option<String>,
}

impl ReactionRecord {
    /// Create a reaction record from its id and compound lists
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::metabolic_data::reaction::ReactionRecord;
    /// let reaction = ReactionRecord::new("RXN-A", &["X"], &["Y", "Z"]);
    /// assert_eq!(reaction.right.len(), 2);
    /// ```
    pub fn new(id: &str, left: &[&str], right: &[&str]) -> ReactionRecord {
        ReactionRecord {
            id: id.to_string(),
            left: left.iter().map(|c| c.to_string()).collect(),
            right: right.iter().map(|c| c.to_string()).collect(),
            name: None,
        }
    }
}
