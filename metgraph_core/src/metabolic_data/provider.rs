//! This module provides the [`DataProvider`] trait, through which graph builders resolve
//! identifiers into records, and an in-memory implementation of it.
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use thiserror::Error;

use crate::metabolic_data::compound::Compound;
use crate::metabolic_data::pathway::PathwayRecord;
use crate::metabolic_data::reaction::ReactionRecord;

/// Kinds of record a [`DataProvider`] can be asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Reaction,
    Pathway,
    Compound,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Reaction => write!(f, "reaction"),
            RecordKind::Pathway => write!(f, "pathway"),
            RecordKind::Compound => write!(f, "compound"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No {kind} with id '{id}' was found")]
    NotFound { kind: RecordKind, id: String },
}

/// Keyed access to fully loaded reaction, pathway, and compound records
///
/// Lookups never perform I/O, a provider is expected to be loaded before any graph is built
/// from it.
pub trait DataProvider {
    /// Find the reaction with the given id
    fn reaction(&self, id: &str) -> Result<&ReactionRecord, ProviderError>;

    /// Find the pathway with the given id
    fn pathway(&self, id: &str) -> Result<&PathwayRecord, ProviderError>;

    /// Find the compound with the given id
    fn compound(&self, id: &str) -> Result<&Compound, ProviderError>;

    /// Iterate over every pathway record, in provider order
    fn pathways(&self) -> Box<dyn Iterator<Item = &PathwayRecord> + '_>;

    /// Resolve a collection of reaction ids, failing on the first one which is missing
    fn reactions<I, S>(&self, ids: I) -> Result<Vec<&ReactionRecord>, ProviderError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| self.reaction(id.as_ref())).collect()
    }

    /// Resolve a collection of pathway ids, failing on the first one which is missing
    fn pathways_by_id<I, S>(&self, ids: I) -> Result<Vec<&PathwayRecord>, ProviderError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| self.pathway(id.as_ref())).collect()
    }

    /// Resolve a collection of compound ids, failing on the first one which is missing
    fn compounds<I, S>(&self, ids: I) -> Result<Vec<&Compound>, ProviderError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| self.compound(id.as_ref())).collect()
    }
}

/// Data provider holding every record in memory
///
/// Records are kept in insertion order, so enumerating pathways is deterministic. Adding a
/// record whose id is already present replaces the old record in place.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    /// Map of reaction ids to reaction records
    pub(crate) reactions: IndexMap<String, ReactionRecord>,
    /// Map of pathway ids to pathway records
    pub(crate) pathways: IndexMap<String, PathwayRecord>,
    /// Map of compound ids to compounds
    pub(crate) compounds: IndexMap<String, Compound>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        InMemoryProvider {
            reactions: IndexMap::new(),
            pathways: IndexMap::new(),
            compounds: IndexMap::new(),
        }
    }

    /// Add a reaction to the provider
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::metabolic_data::provider::{DataProvider, InMemoryProvider};
    /// use metgraph_core::metabolic_data::reaction::ReactionRecord;
    /// let mut provider = InMemoryProvider::new();
    /// provider.add_reaction(ReactionRecord::new("RXN-A", &["X"], &["Y"]));
    /// assert!(provider.reaction("RXN-A").is_ok());
    /// ```
    pub fn add_reaction(&mut self, reaction: ReactionRecord) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a pathway to the provider
    pub fn add_pathway(&mut self, pathway: PathwayRecord) {
        let id = pathway.id.clone();
        self.pathways.insert(id, pathway);
    }

    /// Add a compound to the provider
    pub fn add_compound(&mut self, compound: Compound) {
        let id = compound.id.clone();
        self.compounds.insert(id, compound);
    }

    /// Number of reaction records held
    pub fn num_reactions(&self) -> usize {
        self.reactions.len()
    }

    /// Number of pathway records held
    pub fn num_pathways(&self) -> usize {
        self.pathways.len()
    }

    /// Number of compound records held
    pub fn num_compounds(&self) -> usize {
        self.compounds.len()
    }

    /// Drop every record, leaving an empty provider
    pub fn clear(&mut self) {
        self.reactions.clear();
        self.pathways.clear();
        self.compounds.clear();
    }
}

impl DataProvider for InMemoryProvider {
    fn reaction(&self, id: &str) -> Result<&ReactionRecord, ProviderError> {
        self.reactions.get(id).ok_or_else(|| ProviderError::NotFound {
            kind: RecordKind::Reaction,
            id: id.to_string(),
        })
    }

    fn pathway(&self, id: &str) -> Result<&PathwayRecord, ProviderError> {
        self.pathways.get(id).ok_or_else(|| ProviderError::NotFound {
            kind: RecordKind::Pathway,
            id: id.to_string(),
        })
    }

    fn compound(&self, id: &str) -> Result<&Compound, ProviderError> {
        self.compounds.get(id).ok_or_else(|| ProviderError::NotFound {
            kind: RecordKind::Compound,
            id: id.to_string(),
        })
    }

    fn pathways(&self) -> Box<dyn Iterator<Item = &PathwayRecord> + '_> {
        Box::new(self.pathways.values())
    }
}

#[cfg(test)]
mod provider_tests {
    use super::*;
    use crate::metabolic_data::pathway::PathwayRecordBuilder;

    fn setup_provider() -> InMemoryProvider {
        let mut provider = InMemoryProvider::new();
        provider.add_compound(Compound::new("X"));
        provider.add_compound(Compound::new("Y"));
        provider.add_reaction(ReactionRecord::new("RXN-A", &["X"], &["Y"]));
        provider.add_reaction(ReactionRecord::new("RXN-B", &["Y"], &["X"]));
        provider.add_pathway(PathwayRecord::new("PWY-2", &["RXN-B"]));
        provider.add_pathway(PathwayRecord::new("PWY-1", &["RXN-A"]));
        provider
    }

    #[test]
    fn keyed_lookup() {
        let provider = setup_provider();
        assert_eq!(provider.reaction("RXN-A").unwrap().left, vec!["X".to_string()]);
        assert_eq!(provider.pathway("PWY-1").unwrap().members, vec!["RXN-A".to_string()]);
        assert_eq!(provider.compound("Y").unwrap().id, "Y");
    }

    #[test]
    fn missing_record() {
        let provider = setup_provider();
        assert_eq!(
            provider.reaction("RXN-Z").unwrap_err(),
            ProviderError::NotFound {
                kind: RecordKind::Reaction,
                id: "RXN-Z".to_string()
            }
        );
        assert!(provider.pathway("RXN-A").is_err());
        assert!(provider.compound("Z").is_err());
    }

    #[test]
    fn batch_lookup() {
        let provider = setup_provider();
        let reactions = provider.reactions(["RXN-B", "RXN-A"]).unwrap();
        assert_eq!(reactions[0].id, "RXN-B");
        assert_eq!(reactions[1].id, "RXN-A");
        let missing = provider.reactions(vec!["RXN-A".to_string(), "RXN-Q".to_string()]);
        assert_eq!(
            missing.unwrap_err(),
            ProviderError::NotFound {
                kind: RecordKind::Reaction,
                id: "RXN-Q".to_string()
            }
        );
        assert_eq!(provider.pathways_by_id(["PWY-1"]).unwrap().len(), 1);
        assert_eq!(provider.compounds(["X", "Y"]).unwrap().len(), 2);
        assert!(provider.compounds(["X", "W"]).is_err());
    }

    #[test]
    fn pathway_order_and_replacement() {
        let mut provider = setup_provider();
        let order: Vec<&str> = provider.pathways().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["PWY-2", "PWY-1"]);

        // Replacing a record keeps its position
        provider.add_pathway(
            PathwayRecordBuilder::default()
                .id("PWY-2")
                .members(vec!["RXN-A".to_string()])
                .build()
                .unwrap(),
        );
        let order: Vec<&str> = provider.pathways().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["PWY-2", "PWY-1"]);
        assert_eq!(provider.num_pathways(), 2);
        assert_eq!(provider.pathway("PWY-2").unwrap().members, vec!["RXN-A".to_string()]);
    }

    #[test]
    fn clear_empties_provider() {
        let mut provider = setup_provider();
        provider.clear();
        assert_eq!(provider.num_reactions(), 0);
        assert_eq!(provider.num_pathways(), 0);
        assert_eq!(provider.num_compounds(), 0);
        assert_eq!(provider.pathways().count(), 0);
    }
}
