use std::sync::{LazyLock, RwLock};

use indexmap::IndexSet;
use tracing::warn;

use crate::graph::settings::SubpathwayMarker;

/// Default vertex ceiling, a dense u8 matrix of this size takes 100 MB
pub(crate) const DEFAULT_MAX_VERTICES: usize = 10_000;
/// Pathway member ids containing this marker refer to other pathways
pub(crate) const DEFAULT_SUBPATHWAY_MARKER: &str = "PWY";
/// Known-bad reaction record in the pathway data
pub(crate) const DEFAULT_EXCLUDED_REACTION: &str = "HEME-BIOSYNTHESIS-II";

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Process wide defaults for building graphs
///
/// Every field of [`BuildSettings`](crate::graph::settings::BuildSettings) that isn't
/// explicitly set falls back to the value held here at the time the settings are built.
#[derive(Clone, Debug)]
pub struct Configuration {
    /// Largest number of vertices a graph may have before construction is refused
    pub max_vertices: usize,
    /// Predicate recognising sub-pathway references among pathway members
    pub subpathway_marker: SubpathwayMarker,
    /// Reaction ids which are never added to a graph built from pathways
    pub excluded_reactions: IndexSet<String>,
    /// Number of rounds of sub-pathway expansion
    pub subpathway_depth: usize,
    /// Whether reactions are vertices of the graph
    pub include_reaction_nodes: bool,
    /// Whether sub-pathways referenced by a pathway are expanded
    pub include_subpathways: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            max_vertices: DEFAULT_MAX_VERTICES,
            subpathway_marker: SubpathwayMarker::Contains(DEFAULT_SUBPATHWAY_MARKER.to_string()),
            excluded_reactions: IndexSet::from([DEFAULT_EXCLUDED_REACTION.to_string()]),
            subpathway_depth: 1,
            include_reaction_nodes: true,
            include_subpathways: true,
        }
    }
}

/// Snapshot of the current configuration, or the defaults if the lock is poisoned
pub(crate) fn current() -> Configuration {
    match CONFIGURATION.read() {
        Ok(config) => config.clone(),
        Err(_) => {
            warn!("Configuration lock is poisoned, using default build settings");
            Configuration::default()
        }
    }
}
