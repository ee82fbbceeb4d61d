//! Core rust implementation of metgraph, a crate for turning metabolic reactions, pathways, and
//! organisms into directed graphs of compounds and reactions.
//!
//! Records are looked up through a [`DataProvider`](metabolic_data::provider::DataProvider),
//! and graphs are built with [`Graph::from_reactions`](graph::Graph::from_reactions),
//! [`Graph::from_pathways`](graph::Graph::from_pathways), or
//! [`Graph::from_organism`](graph::Graph::from_organism).

pub mod configuration;
pub mod graph;
pub mod io;
pub mod metabolic_data;
