//! Settings controlling how graphs are built
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use derive_builder::Builder;
use indexmap::IndexSet;

use crate::configuration;

/// Predicate deciding whether a pathway member id refers to another pathway
#[derive(Clone)]
pub enum SubpathwayMarker {
    /// The id contains the given string anywhere
    Contains(String),
    /// The id starts with the given string
    Prefix(String),
    /// The id ends with the given string
    Suffix(String),
    /// Any other rule
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl SubpathwayMarker {
    /// Whether `id` is marked as a sub-pathway
    pub fn is_subpathway(&self, id: &str) -> bool {
        match self {
            SubpathwayMarker::Contains(marker) => id.contains(marker.as_str()),
            SubpathwayMarker::Prefix(marker) => id.starts_with(marker.as_str()),
            SubpathwayMarker::Suffix(marker) => id.ends_with(marker.as_str()),
            SubpathwayMarker::Custom(predicate) => predicate(id),
        }
    }

    /// Wrap a closure as a marker
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        SubpathwayMarker::Custom(Arc::new(predicate))
    }
}

impl Debug for SubpathwayMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubpathwayMarker::Contains(marker) => f.debug_tuple("Contains").field(marker).finish(),
            SubpathwayMarker::Prefix(marker) => f.debug_tuple("Prefix").field(marker).finish(),
            SubpathwayMarker::Suffix(marker) => f.debug_tuple("Suffix").field(marker).finish(),
            SubpathwayMarker::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for the graph builders
///
/// Fields left unset on the builder take the value currently held by
/// [`CONFIGURATION`](crate::configuration::CONFIGURATION).
///
/// # Examples
/// ```rust
/// use metgraph_core::graph::settings::BuildSettingsBuilder;
/// let settings = BuildSettingsBuilder::default()
///     .include_reaction_nodes(false)
///     .max_vertices(500usize)
///     .build()
///     .unwrap();
/// assert!(!settings.include_reaction_nodes);
/// assert!(settings.include_subpathways);
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(default)]
pub struct BuildSettings {
    /// Create a vertex for every reaction, otherwise compounds are linked directly
    pub include_reaction_nodes: bool,
    /// Expand sub-pathways referenced by the requested pathways
    pub include_subpathways: bool,
    /// Number of rounds of sub-pathway expansion, 1 expands only direct references
    pub subpathway_depth: usize,
    /// Largest vertex count a graph may reach before construction fails
    pub max_vertices: usize,
    /// Rule telling sub-pathway ids apart from reaction ids
    pub subpathway_marker: SubpathwayMarker,
    /// Reaction ids which are dropped when building from pathways
    #[builder(setter(custom))]
    pub excluded_reactions: IndexSet<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        let config = configuration::current();
        BuildSettings {
            include_reaction_nodes: config.include_reaction_nodes,
            include_subpathways: config.include_subpathways,
            subpathway_depth: config.subpathway_depth,
            max_vertices: config.max_vertices,
            subpathway_marker: config.subpathway_marker,
            excluded_reactions: config.excluded_reactions,
        }
    }
}

impl BuildSettingsBuilder {
    /// Replace the set of excluded reaction ids
    pub fn excluded_reactions<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_reactions = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}

impl BuildSettings {
    /// Settings using the configured defaults, with the two graph shape flags overridden
    pub fn with_flags(include_subpathways: bool, include_reaction_nodes: bool) -> Self {
        BuildSettings {
            include_subpathways,
            include_reaction_nodes,
            ..BuildSettings::default()
        }
    }

    /// Whether `id` refers to a sub-pathway under these settings
    pub fn is_subpathway(&self, id: &str) -> bool {
        self.subpathway_marker.is_subpathway(id)
    }

    /// Whether `id` is on the exclusion list
    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluded_reactions.contains(id)
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn markers() {
        let contains = SubpathwayMarker::Contains("PWY".to_string());
        assert!(contains.is_subpathway("GLYCOLYSIS-PWY"));
        assert!(contains.is_subpathway("PWY-5177"));
        assert!(!contains.is_subpathway("RXN-1234"));

        let prefix = SubpathwayMarker::Prefix("PWY".to_string());
        assert!(prefix.is_subpathway("PWY-5177"));
        assert!(!prefix.is_subpathway("GLYCOLYSIS-PWY"));

        let suffix = SubpathwayMarker::Suffix("PWY".to_string());
        assert!(suffix.is_subpathway("GLYCOLYSIS-PWY"));
        assert!(!suffix.is_subpathway("PWY-5177"));

        let custom = SubpathwayMarker::custom(|id| id.starts_with("SUB:"));
        assert!(custom.is_subpathway("SUB:1"));
        assert!(!custom.is_subpathway("RXN:1"));
        assert_eq!(format!("{:?}", custom), "Custom(..)");
    }

    #[test]
    fn defaults_follow_configuration() {
        let settings = BuildSettings::default();
        assert!(settings.include_reaction_nodes);
        assert!(settings.include_subpathways);
        assert_eq!(settings.subpathway_depth, 1);
        assert_eq!(settings.max_vertices, 10_000);
        assert!(settings.is_excluded("HEME-BIOSYNTHESIS-II"));
        assert!(settings.is_subpathway("PWY-101"));
    }

    #[test]
    fn unset_fields_read_configuration() {
        use crate::configuration::CONFIGURATION;

        // Restored before asserting, the id is unused elsewhere
        CONFIGURATION
            .write()
            .unwrap()
            .excluded_reactions
            .insert("RXN-CONFIGURED".to_string());
        let from_config = BuildSettingsBuilder::default().build().unwrap();
        let overridden = BuildSettingsBuilder::default()
            .excluded_reactions(["RXN-OTHER"])
            .build()
            .unwrap();
        CONFIGURATION
            .write()
            .unwrap()
            .excluded_reactions
            .shift_remove("RXN-CONFIGURED");

        assert!(from_config.is_excluded("RXN-CONFIGURED"));
        assert!(from_config.is_excluded("HEME-BIOSYNTHESIS-II"));
        assert!(!overridden.is_excluded("RXN-CONFIGURED"));
        assert!(overridden.is_excluded("RXN-OTHER"));
        assert!(!BuildSettings::default().is_excluded("RXN-CONFIGURED"));
    }

    #[test]
    fn builder_overrides() {
        let settings = BuildSettingsBuilder::default()
            .include_subpathways(false)
            .subpathway_depth(3usize)
            .excluded_reactions(["RXN-BAD"])
            .subpathway_marker(SubpathwayMarker::Prefix("SUB-".to_string()))
            .build()
            .unwrap();
        assert!(!settings.include_subpathways);
        assert!(settings.include_reaction_nodes);
        assert_eq!(settings.subpathway_depth, 3);
        assert!(settings.is_excluded("RXN-BAD"));
        assert!(!settings.is_excluded("HEME-BIOSYNTHESIS-II"));
        assert!(settings.is_subpathway("SUB-1"));
        assert!(!settings.is_subpathway("PWY-1"));
    }

    #[test]
    fn flags_constructor() {
        let settings = BuildSettings::with_flags(false, false);
        assert!(!settings.include_subpathways);
        assert!(!settings.include_reaction_nodes);
        assert_eq!(settings.subpathway_depth, 1);
    }
}
