use metgraph_core::graph::{BuildSettings, Graph, GraphError};
use metgraph_core::metabolic_data::provider::InMemoryProvider;

use pyo3::exceptions::{PyIOError, PyKeyError, PyMemoryError};
use pyo3::prelude::*;

fn graph_error(err: GraphError) -> PyErr {
    match err {
        GraphError::NotFound(_) => PyKeyError::new_err(err.to_string()),
        GraphError::ResourceExceeded { .. } => PyMemoryError::new_err(err.to_string()),
    }
}

/// Reaction, pathway, and compound records loaded from a JSON snapshot
#[pyclass(name = "DataProvider", frozen)]
struct PyDataProvider {
    inner: InMemoryProvider,
}

#[pymethods]
impl PyDataProvider {
    #[staticmethod]
    fn from_json(path: &str) -> PyResult<Self> {
        let inner =
            InMemoryProvider::read_json(path).map_err(|e| PyIOError::new_err(e.to_string()))?;
        Ok(PyDataProvider { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "DataProvider(compounds={}, reactions={}, pathways={})",
            self.inner.num_compounds(),
            self.inner.num_reactions(),
            self.inner.num_pathways()
        )
    }
}

#[pyclass(name = "Graph", frozen)]
struct PyGraph {
    inner: Graph,
}

#[pymethods]
impl PyGraph {
    #[staticmethod]
    #[pyo3(signature = (provider, reaction_ids, include_reactions=true))]
    fn from_reactions(
        provider: &PyDataProvider,
        reaction_ids: Vec<String>,
        include_reactions: bool,
    ) -> PyResult<Self> {
        let settings = BuildSettings {
            include_reaction_nodes: include_reactions,
            ..BuildSettings::default()
        };
        let inner =
            Graph::from_reactions(&provider.inner, &reaction_ids, &settings).map_err(graph_error)?;
        Ok(PyGraph { inner })
    }

    #[staticmethod]
    #[pyo3(signature = (provider, pathway_ids, include_subpathways=true, include_reactions=true))]
    fn from_pathways(
        provider: &PyDataProvider,
        pathway_ids: Vec<String>,
        include_subpathways: bool,
        include_reactions: bool,
    ) -> PyResult<Self> {
        let settings = BuildSettings::with_flags(include_subpathways, include_reactions);
        let inner =
            Graph::from_pathways(&provider.inner, &pathway_ids, &settings).map_err(graph_error)?;
        Ok(PyGraph { inner })
    }

    #[staticmethod]
    #[pyo3(signature = (provider, organism_id, include_subpathways=true, include_reactions=true))]
    fn from_organism(
        provider: &PyDataProvider,
        organism_id: &str,
        include_subpathways: bool,
        include_reactions: bool,
    ) -> PyResult<Self> {
        let settings = BuildSettings::with_flags(include_subpathways, include_reactions);
        let inner =
            Graph::from_organism(&provider.inner, organism_id, &settings).map_err(graph_error)?;
        Ok(PyGraph { inner })
    }

    fn prune_vertices(&self, to_remove: Vec<String>) -> Self {
        PyGraph {
            inner: self.inner.prune_vertices(&to_remove),
        }
    }

    #[getter]
    fn compounds(&self) -> Vec<String> {
        self.inner.compounds().to_vec()
    }

    #[getter]
    fn reactions(&self) -> Vec<String> {
        self.inner.reactions().to_vec()
    }

    /// Adjacency matrix as a list of rows
    #[getter]
    fn adjacency(&self) -> Vec<Vec<u8>> {
        let adjacency = self.inner.adjacency();
        adjacency
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Edges as (source, target) label pairs
    fn edges(&self) -> Vec<(String, String)> {
        self.inner
            .labelled_edges()
            .into_iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.vertex_count()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDataProvider>()?;
    m.add_class::<PyGraph>()?;
    Ok(())
}
