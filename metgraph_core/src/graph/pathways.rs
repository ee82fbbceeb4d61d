//! Building graphs from pathways, expanding the sub-pathways they reference
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::graph::metabolic_graph::{Graph, GraphError};
use crate::graph::settings::BuildSettings;
use crate::metabolic_data::provider::DataProvider;

impl Graph {
    /// Build the graph of every reaction belonging to the given pathways
    ///
    /// See [`pathway_reactions`] for how pathway members are turned into reaction ids, the
    /// resulting ids are passed to [`Graph::from_reactions`].
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if a pathway, a referenced sub-pathway being expanded, or a
    ///   member reaction can't be resolved
    /// - [`GraphError::ResourceExceeded`] if the graph would be too large
    pub fn from_pathways<P, I, S>(
        provider: &P,
        pathway_ids: I,
        settings: &BuildSettings,
    ) -> Result<Graph, GraphError>
    where
        P: DataProvider,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reaction_ids = pathway_reactions(provider, pathway_ids, settings)?;
        Graph::from_reactions(provider, &reaction_ids, settings)
    }
}

/// Collect the reaction ids making up the given pathways
///
/// 1. The members of every requested pathway are gathered, keeping first occurrence order.
/// 2. If `settings.include_subpathways` is set, members recognised as sub-pathways by
///    `settings.subpathway_marker` are looked up and their members added. This is repeated
///    `settings.subpathway_depth` times, each pathway is expanded at most once.
/// 3. Members still recognised as sub-pathways are dropped, they are never treated as
///    reactions.
/// 4. Members in `settings.excluded_reactions` are dropped.
///
/// An empty list of pathways gives an empty list of reactions.
pub fn pathway_reactions<P, I, S>(
    provider: &P,
    pathway_ids: I,
    settings: &BuildSettings,
) -> Result<IndexSet<String>, GraphError>
where
    P: DataProvider,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pathway_ids: IndexSet<String> = pathway_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    debug!(
        pathways = pathway_ids.len(),
        include_subpathways = settings.include_subpathways,
        "Collecting pathway reactions"
    );

    let mut candidates: IndexSet<String> = IndexSet::new();
    for pathway in provider.pathways_by_id(&pathway_ids)? {
        candidates.extend(pathway.members.iter().cloned());
    }

    if settings.include_subpathways {
        let mut expanded = pathway_ids;
        for round in 0..settings.subpathway_depth {
            let pending: Vec<String> = candidates
                .iter()
                .filter(|id| settings.is_subpathway(id) && !expanded.contains(*id))
                .cloned()
                .collect();
            if pending.is_empty() {
                break;
            }
            trace!(round, subpathways = pending.len(), "Expanding sub-pathways");
            for pathway in provider.pathways_by_id(&pending)? {
                candidates.extend(pathway.members.iter().cloned());
            }
            expanded.extend(pending);
        }
    }

    let before = candidates.len();
    candidates.retain(|id| !settings.is_subpathway(id) && !settings.is_excluded(id));
    debug!(
        reactions = candidates.len(),
        dropped = before - candidates.len(),
        "Collected pathway reactions"
    );
    Ok(candidates)
}
