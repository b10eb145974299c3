//! Shared types for the PageRank estimators
//!
//! Provides a read-only, densely indexed view of a link graph for algorithm execution.

use crate::error::{RankError, RankResult};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// Page identifier (a document name such as `"1.html"`)
pub type PageId = String;

/// One-step distribution over the next page. Covers every page of the graph.
pub type ProbabilityDistribution = BTreeMap<PageId, f64>;

/// Estimated rank per page. Covers every page of the graph.
pub type RankMapping = BTreeMap<PageId, f64>;

/// A dense, integer-indexed view of a link graph using Compressed Sparse Row (CSR) format.
///
/// Pages are indexed in lexicographic order, so two graphs built from the same
/// links always share the same layout.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    /// Mapping from dense index (0..N) back to PageId
    index_to_page: Vec<PageId>,
    /// Mapping from PageId to dense index
    page_to_index: HashMap<PageId, usize>,

    /// Offsets into `out_targets`. Size = page_count + 1
    out_offsets: Vec<usize>,
    /// Contiguous array of linked page indices
    out_targets: Vec<usize>,

    /// Inlink index (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = page_count + 1
    in_offsets: Vec<usize>,
    /// Contiguous array of linking page indices
    in_sources: Vec<usize>,
}

impl LinkGraph {
    /// Build a graph, rejecting any out-link whose target is not itself a page.
    pub fn try_from_links<L, K, I, V>(links: L) -> RankResult<Self>
    where
        L: IntoIterator<Item = (K, I)>,
        K: Into<PageId>,
        I: IntoIterator<Item = V>,
        V: Into<PageId>,
    {
        let adjacency = collect_adjacency(links);
        for (page, targets) in &adjacency {
            if let Some(target) = targets.iter().find(|t| !adjacency.contains_key(*t)) {
                return Err(RankError::MalformedGraph {
                    page: page.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(Self::from_adjacency(adjacency))
    }

    /// Build a graph, dropping out-links whose target is not itself a page.
    pub fn from_links_lossy<L, K, I, V>(links: L) -> Self
    where
        L: IntoIterator<Item = (K, I)>,
        K: Into<PageId>,
        I: IntoIterator<Item = V>,
        V: Into<PageId>,
    {
        let mut adjacency = collect_adjacency(links);
        let known: BTreeSet<PageId> = adjacency.keys().cloned().collect();
        for (page, targets) in adjacency.iter_mut() {
            targets.retain(|target| {
                let keep = known.contains(target);
                if !keep {
                    warn!("Dropping link {} -> {}: target is not in the graph", page, target);
                }
                keep
            });
        }
        Self::from_adjacency(adjacency)
    }

    fn from_adjacency(adjacency: BTreeMap<PageId, BTreeSet<PageId>>) -> Self {
        // 1. Build index mappings
        let index_to_page: Vec<PageId> = adjacency.keys().cloned().collect();
        let page_to_index: HashMap<PageId, usize> = index_to_page
            .iter()
            .enumerate()
            .map(|(idx, page)| (page.clone(), idx))
            .collect();
        let page_count = index_to_page.len();

        // 2. Build adjacency lists (Intermediate step)
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); page_count];
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); page_count];

        for (u_idx, targets) in adjacency.values().enumerate() {
            for target in targets {
                if let Some(&v_idx) = page_to_index.get(target) {
                    outgoing[u_idx].push(v_idx);
                    incoming[v_idx].push(u_idx);
                }
            }
        }

        // 3. Convert to CSR
        let mut out_offsets = Vec::with_capacity(page_count + 1);
        let mut out_targets = Vec::new();
        out_offsets.push(0);
        for neighbors in outgoing {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(page_count + 1);
        let mut in_sources = Vec::new();
        in_offsets.push(0);
        for sources in incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        LinkGraph {
            index_to_page,
            page_to_index,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.index_to_page.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_page.is_empty()
    }

    /// All pages, in index order
    pub fn pages(&self) -> &[PageId] {
        &self.index_to_page
    }

    /// Name of the page at `idx`, if in range
    pub fn page(&self, idx: usize) -> Option<&str> {
        self.index_to_page.get(idx).map(String::as_str)
    }

    /// Dense index of a page, if present
    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.page_to_index.get(page).copied()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.page_to_index.contains_key(page)
    }

    /// Get the out-degree of a page (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a page (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// A page with no outbound links
    pub fn is_dangling(&self, idx: usize) -> bool {
        self.out_degree(idx) == 0
    }

    /// Pages linked to by `idx`, in ascending index order
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Pages linking to `idx`, in ascending index order
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Map an index-aligned score vector back to page names
    pub fn to_mapping(&self, scores: &[f64]) -> RankMapping {
        self.index_to_page
            .iter()
            .cloned()
            .zip(scores.iter().copied())
            .collect()
    }
}

/// Collapse raw links into a sorted page -> link set mapping
fn collect_adjacency<L, K, I, V>(links: L) -> BTreeMap<PageId, BTreeSet<PageId>>
where
    L: IntoIterator<Item = (K, I)>,
    K: Into<PageId>,
    I: IntoIterator<Item = V>,
    V: Into<PageId>,
{
    let mut adjacency: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
    for (page, targets) in links {
        adjacency
            .entry(page.into())
            .or_default()
            .extend(targets.into_iter().map(Into::into));
    }
    adjacency
}

pub(crate) fn check_non_empty(graph: &LinkGraph) -> RankResult<()> {
    if graph.is_empty() {
        return Err(RankError::InvalidInput("graph has no pages".to_string()));
    }
    Ok(())
}

/// Reject a damping factor outside the open interval (0, 1), NaN included
pub fn validate_damping(damping_factor: f64) -> RankResult<()> {
    if !damping_factor.is_finite() || damping_factor <= 0.0 || damping_factor >= 1.0 {
        return Err(RankError::InvalidInput(format!(
            "damping factor must lie in (0, 1), got {}",
            damping_factor
        )));
    }
    Ok(())
}
