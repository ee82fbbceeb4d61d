//! Module providing the [`Graph`](metabolic_graph::Graph) struct, a directed graph of
//! compounds and reactions, along with the builders producing it.

pub mod metabolic_graph;
pub mod organism;
pub mod pathways;
pub mod reactions;
pub mod settings;

pub use metabolic_graph::{Graph, GraphError, VertexKind};
pub use settings::{BuildSettings, BuildSettingsBuilder, SubpathwayMarker};
