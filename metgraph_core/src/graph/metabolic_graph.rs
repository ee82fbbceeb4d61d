//! This module provides the Graph struct representing a metabolic network as an adjacency matrix
use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use nalgebra::DMatrix;
use thiserror::Error;
use tracing::warn;

use crate::metabolic_data::provider::ProviderError;

/// Number of labels shown per partition by the [`Display`] summary
const SUMMARY_PREVIEW: usize = 5;

/// Directed graph of compounds and (optionally) reactions
///
/// Vertices are ordered with every compound first, followed by every reaction. Entry `(i, j)`
/// of the adjacency matrix is 1 when there is an edge from vertex `i` to vertex `j`, and 0
/// otherwise.
///
/// Graphs are only produced by [`Graph::from_reactions`], [`Graph::from_pathways`],
/// [`Graph::from_organism`], or by pruning an existing graph with
/// [`Graph::prune_vertices`], and are never modified after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    /// Square 0/1 adjacency matrix, of dimension compounds + reactions
    adjacency: DMatrix<u8>,
    /// Compound vertex labels, occupying indices `0..compounds.len()`
    compounds: Vec<String>,
    /// Reaction vertex labels, following the compounds
    reactions: Vec<String>,
}

/// Which partition a vertex belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Compound,
    Reaction,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unable to resolve identifier: {0}")]
    NotFound(#[from] ProviderError),
    #[error("Graph would have {vertices} vertices, exceeding the limit of {limit}")]
    ResourceExceeded { vertices: usize, limit: usize },
}

impl Graph {
    /// Assemble a graph from its vertex partitions and edge list
    ///
    /// Edges are given as vertex indices, repeated edges collapse into a single matrix entry.
    /// The vertex count is checked against `max_vertices` before the matrix is allocated.
    pub(crate) fn from_edges(
        compounds: IndexSet<String>,
        reactions: IndexSet<String>,
        edges: &IndexSet<(usize, usize)>,
        max_vertices: usize,
    ) -> Result<Graph, GraphError> {
        let vertices = compounds.len() + reactions.len();
        Graph::check_vertex_limit(vertices, max_vertices)?;
        let mut adjacency = DMatrix::<u8>::zeros(vertices, vertices);
        for &(from, to) in edges {
            adjacency[(from, to)] = 1;
        }
        Ok(Graph {
            adjacency,
            compounds: compounds.into_iter().collect(),
            reactions: reactions.into_iter().collect(),
        })
    }

    /// Fail with [`GraphError::ResourceExceeded`] if `vertices` is above `max_vertices`
    pub(crate) fn check_vertex_limit(
        vertices: usize,
        max_vertices: usize,
    ) -> Result<(), GraphError> {
        if vertices > max_vertices {
            warn!(vertices, limit = max_vertices, "Refusing to build oversized graph");
            return Err(GraphError::ResourceExceeded {
                vertices,
                limit: max_vertices,
            });
        }
        Ok(())
    }

    // region Accessors
    /// The adjacency matrix, rows are edge sources and columns edge targets
    pub fn adjacency(&self) -> &DMatrix<u8> {
        &self.adjacency
    }

    /// Compound labels, in vertex order
    pub fn compounds(&self) -> &[String] {
        &self.compounds
    }

    /// Reaction labels, in vertex order
    pub fn reactions(&self) -> &[String] {
        &self.reactions
    }

    /// Every vertex label in vertex order, compounds first
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.compounds
            .iter()
            .chain(self.reactions.iter())
            .map(String::as_str)
    }

    /// Total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.compounds.len() + self.reactions.len()
    }

    /// Total number of edges, the sum of the adjacency matrix entries
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|&entry| entry as usize).sum()
    }

    /// Whether the vertex at `index` is a compound or a reaction
    ///
    /// Returns `None` if the index is out of range.
    pub fn vertex_kind(&self, index: usize) -> Option<VertexKind> {
        if index < self.compounds.len() {
            Some(VertexKind::Compound)
        } else if index < self.vertex_count() {
            Some(VertexKind::Reaction)
        } else {
            None
        }
    }

    /// Label of the vertex at `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        match self.vertex_kind(index)? {
            VertexKind::Compound => Some(self.compounds[index].as_str()),
            VertexKind::Reaction => Some(self.reactions[index - self.compounds.len()].as_str()),
        }
    }

    /// Index of the first vertex with the given label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels().position(|l| l == label)
    }

    /// Edges as `(source, target)` index pairs, ordered by source then target
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count();
        (0..n).flat_map(move |i| {
            (0..n)
                .filter(move |&j| self.adjacency[(i, j)] != 0)
                .map(move |j| (i, j))
        })
    }

    /// Edges as `(source, target)` label pairs, in the same order as [`Graph::edges`]
    pub fn labelled_edges(&self) -> Vec<(&str, &str)> {
        let labels: Vec<&str> = self.labels().collect();
        self.edges().map(|(i, j)| (labels[i], labels[j])).collect()
    }

    /// Whether there is an edge from the vertex labelled `from` to the one labelled `to`
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.adjacency[(i, j)] != 0,
            _ => false,
        }
    }

    /// Number of edges ending at the vertex labelled `label`
    pub fn in_degree(&self, label: &str) -> Option<usize> {
        let j = self.index_of(label)?;
        Some(self.adjacency.column(j).iter().map(|&e| e as usize).sum())
    }

    /// Number of edges starting at the vertex labelled `label`
    pub fn out_degree(&self, label: &str) -> Option<usize> {
        let i = self.index_of(label)?;
        Some(self.adjacency.row(i).iter().map(|&e| e as usize).sum())
    }
    // endregion Accessors

    /// Create a new graph without the vertices whose labels are in `to_remove`
    ///
    /// Remaining vertices keep their relative order, and the adjacency matrix is restricted to
    /// their rows and columns. Labels which aren't in the graph are ignored.
    ///
    /// # Examples
    /// ```rust
    /// use metgraph_core::graph::{BuildSettings, Graph};
    /// use metgraph_core::metabolic_data::provider::InMemoryProvider;
    /// use metgraph_core::metabolic_data::reaction::ReactionRecord;
    /// let mut provider = InMemoryProvider::new();
    /// provider.add_reaction(ReactionRecord::new("RXN-A", &["X", "H2O"], &["Y"]));
    /// let graph = Graph::from_reactions(&provider, &["RXN-A"], &BuildSettings::default()).unwrap();
    /// let pruned = graph.prune_vertices(&["H2O"]);
    /// assert_eq!(pruned.compounds(), &["X".to_string(), "Y".to_string()]);
    /// assert_eq!(pruned.edge_count(), 2);
    /// ```
    pub fn prune_vertices<I, S>(&self, to_remove: I) -> Graph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let to_remove: IndexSet<String> = to_remove
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        let keep: Vec<usize> = self
            .labels()
            .enumerate()
            .filter(|(_, label)| !to_remove.contains(*label))
            .map(|(i, _)| i)
            .collect();
        let adjacency = self.adjacency.select_rows(&keep).select_columns(&keep);
        let retain = |labels: &[String]| -> Vec<String> {
            labels
                .iter()
                .filter(|label| !to_remove.contains(label.as_str()))
                .cloned()
                .collect()
        };
        Graph {
            adjacency,
            compounds: retain(&self.compounds),
            reactions: retain(&self.reactions),
        }
    }
}

/// Format up to [`SUMMARY_PREVIEW`] labels, marking truncation with `...`
fn preview(labels: &[String]) -> String {
    let shown: Vec<&str> = labels
        .iter()
        .take(SUMMARY_PREVIEW)
        .map(String::as_str)
        .collect();
    if labels.len() > SUMMARY_PREVIEW {
        format!("[{} ...]", shown.join(", "))
    } else {
        format!("[{}]", shown.join(", "))
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph")?;
        writeln!(
            f,
            "reactions ({}): {}",
            self.reactions.len(),
            preview(&self.reactions)
        )?;
        writeln!(
            f,
            "compounds ({}): {}",
            self.compounds.len(),
            preview(&self.compounds)
        )?;
        write!(f, "edges ({})", self.edge_count())
    }
}
