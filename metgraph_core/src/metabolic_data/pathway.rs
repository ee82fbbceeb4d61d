//! This module provides a struct for representing pathway records

use derive_builder::Builder;

/// Represents a pathway, a named collection of reactions and sub-pathways
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct PathwayRecord {
    /// Used to identify the pathway
    #[builder(setter(into))]
    pub id: String,
    /// Ids of the reactions and sub-pathways making up this pathway
    ///
    /// Sub-pathway ids are told apart from reaction ids by a naming convention, see
    /// [`SubpathwayMarker`](crate::graph::settings::SubpathwayMarker).
    #[builder(default = "Vec::new()")]
    pub members: Vec<String>,
    /// Organisms known to use this pathway
    ///
    /// `None` when the source record had no usable species list.
    #[builder(default = "None")]
    pub organisms: Option<Vec<String>>,
    /// Human-readable pathway name
    #[builder(default = "None")]
    pub name: Option<String>,
}

impl PathwayRecord {
    /// Create a pathway record without organism information
    pub fn new(id: &str, members: &[&str]) -> PathwayRecord {
        PathwayRecord {
            id: id.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
            organisms: None,
            name: None,
        }
    }

    /// Whether this pathway lists `organism` among the organisms using it
    pub fn is_used_by(&self, organism: &str) -> bool {
        match &self.organisms {
            Some(organisms) => organisms.iter().any(|o| o == organism),
            None => false,
        }
    }
}

#[cfg(test)]
mod pathway_tests {
    use super::*;

    #[test]
    fn organism_membership() {
        let pathway = PathwayRecordBuilder::default()
            .id("PWY-1")
            .members(vec!["RXN-A".to_string()])
            .organisms(Some(vec!["ECOLI".to_string(), "HUMAN".to_string()]))
            .build()
            .unwrap();
        assert!(pathway.is_used_by("ECOLI"));
        assert!(pathway.is_used_by("HUMAN"));
        assert!(!pathway.is_used_by("YEAST"));
    }

    #[test]
    fn missing_organisms_never_match() {
        let pathway = PathwayRecord::new("PWY-1", &["RXN-A"]);
        assert!(pathway.organisms.is_none());
        assert!(!pathway.is_used_by("ECOLI"));
        assert!(!pathway.is_used_by(""));
    }
}
