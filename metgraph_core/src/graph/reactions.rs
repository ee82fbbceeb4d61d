//! Building graphs from an explicit set of reactions
use indexmap::IndexSet;
use tracing::debug;

use crate::graph::metabolic_graph::{Graph, GraphError};
use crate::graph::settings::BuildSettings;
use crate::metabolic_data::provider::DataProvider;
use crate::metabolic_data::reaction::ReactionRecord;

impl Graph {
    /// Build the graph of the given reactions
    ///
    /// With `settings.include_reaction_nodes` every reaction becomes a vertex, with an edge from
    /// each left side compound to the reaction and from the reaction to each right side
    /// compound. Otherwise there are no reaction vertices, and each left side compound is
    /// linked directly to each right side compound of the same reaction.
    ///
    /// Vertices are numbered by first encounter: reactions are visited in the order given
    /// (repeats ignored). With reaction vertices, the left compounds then the right compounds
    /// of a reaction are visited in list order. Without them, each left compound is visited
    /// followed by every right compound, so a reaction with no left side compounds adds no
    /// vertices. All compounds precede all reactions.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if any reaction id can't be resolved
    /// - [`GraphError::ResourceExceeded`] if the graph would have more than
    ///   `settings.max_vertices` vertices
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::graph::{BuildSettings, Graph};
    /// use metgraph_core::metabolic_data::provider::InMemoryProvider;
    /// use metgraph_core::metabolic_data::reaction::ReactionRecord;
    /// let mut provider = InMemoryProvider::new();
    /// provider.add_reaction(ReactionRecord::new("RXN-A", &["X"], &["Y"]));
    /// provider.add_reaction(ReactionRecord::new("RXN-B", &["Y"], &["Z"]));
    /// let graph = Graph::from_reactions(&provider, &["RXN-A", "RXN-B"], &BuildSettings::default()).unwrap();
    /// assert_eq!(graph.vertex_count(), 5);
    /// assert_eq!(graph.edge_count(), 4);
    /// ```
    pub fn from_reactions<P, I, S>(
        provider: &P,
        reaction_ids: I,
        settings: &BuildSettings,
    ) -> Result<Graph, GraphError>
    where
        P: DataProvider,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reaction_ids: IndexSet<String> = reaction_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        debug!(
            reactions = reaction_ids.len(),
            include_reaction_nodes = settings.include_reaction_nodes,
            "Building graph from reactions"
        );
        // Resolve everything up front so a missing id never leaves a partial graph
        let reactions = provider.reactions(&reaction_ids)?;

        let mut compounds: IndexSet<String> = IndexSet::new();
        let mut reaction_vertices: IndexSet<String> = IndexSet::new();
        for reaction in &reactions {
            if settings.include_reaction_nodes {
                for compound in reaction.left.iter().chain(reaction.right.iter()) {
                    register(&mut compounds, compound);
                }
                reaction_vertices.insert(reaction.id.clone());
            } else {
                // Right side compounds only become vertices alongside a left side compound
                for left in &reaction.left {
                    register(&mut compounds, left);
                    for right in &reaction.right {
                        register(&mut compounds, right);
                    }
                }
            }
        }
        // Refuse oversized graphs before any edges are collected
        Graph::check_vertex_limit(
            compounds.len() + reaction_vertices.len(),
            settings.max_vertices,
        )?;

        let edges = if settings.include_reaction_nodes {
            bipartite_edges(&reactions, &compounds, &reaction_vertices)
        } else {
            compound_edges(&reactions, &compounds)
        };

        let graph = Graph::from_edges(compounds, reaction_vertices, &edges, settings.max_vertices)?;
        debug!(
            compounds = graph.compounds().len(),
            reactions = graph.reactions().len(),
            edges = graph.edge_count(),
            "Built graph"
        );
        Ok(graph)
    }
}

/// Add a compound to the vertex set if it isn't already there
fn register(compounds: &mut IndexSet<String>, compound: &str) {
    if !compounds.contains(compound) {
        compounds.insert(compound.to_string());
    }
}

/// Edges compound -> reaction -> compound, with reaction vertices numbered after the compounds
fn bipartite_edges(
    reactions: &[&ReactionRecord],
    compounds: &IndexSet<String>,
    reaction_vertices: &IndexSet<String>,
) -> IndexSet<(usize, usize)> {
    let offset = compounds.len();
    let mut edges = IndexSet::new();
    for reaction in reactions {
        let Some(r) = reaction_vertices.get_index_of(&reaction.id) else {
            continue;
        };
        let r = r + offset;
        for left in &reaction.left {
            if let Some(l) = compounds.get_index_of(left) {
                edges.insert((l, r));
            }
        }
        for right in &reaction.right {
            if let Some(c) = compounds.get_index_of(right) {
                edges.insert((r, c));
            }
        }
    }
    edges
}

/// Edges from every left side compound to every right side compound of each reaction
fn compound_edges(
    reactions: &[&ReactionRecord],
    compounds: &IndexSet<String>,
) -> IndexSet<(usize, usize)> {
    let mut edges = IndexSet::new();
    for reaction in reactions {
        for left in &reaction.left {
            let Some(l) = compounds.get_index_of(left) else {
                continue;
            };
            for right in &reaction.right {
                if let Some(c) = compounds.get_index_of(right) {
                    edges.insert((l, c));
                }
            }
        }
    }
    edges
}
