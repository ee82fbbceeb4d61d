//! Building the graph of every pathway an organism uses
use tracing::debug;

use crate::graph::metabolic_graph::{Graph, GraphError};
use crate::graph::settings::BuildSettings;
use crate::metabolic_data::provider::DataProvider;

/// Ids of the pathways listing `organism_id` among their organisms, in provider order
///
/// Pathways without organism information never match.
pub fn organism_pathways<P: DataProvider>(provider: &P, organism_id: &str) -> Vec<String> {
    provider
        .pathways()
        .filter(|pathway| pathway.is_used_by(organism_id))
        .map(|pathway| pathway.id.clone())
        .collect()
}

impl Graph {
    /// Build the graph of every pathway used by an organism
    ///
    /// The matching pathways are passed on to [`Graph::from_pathways`]. An organism with no
    /// pathways gives an empty graph.
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::graph::{BuildSettings, Graph};
    /// use metgraph_core::metabolic_data::provider::InMemoryProvider;
    /// let provider = InMemoryProvider::new();
    /// let graph = Graph::from_organism(&provider, "ORG-X", &BuildSettings::default()).unwrap();
    /// assert_eq!(graph.vertex_count(), 0);
    /// ```
    pub fn from_organism<P: DataProvider>(
        provider: &P,
        organism_id: &str,
        settings: &BuildSettings,
    ) -> Result<Graph, GraphError> {
        let pathways = organism_pathways(provider, organism_id);
        debug!(
            organism = organism_id,
            pathways = pathways.len(),
            "Resolved organism pathways"
        );
        Graph::from_pathways(provider, &pathways, settings)
    }
}
