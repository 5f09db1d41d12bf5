//! Capacity-weighted undirected graph with vertex contraction.
//!
//! [`CutGraph`] is the working representation every solver in this crate
//! operates on. Vertices are caller-chosen `usize` ids; each vertex records
//! the set of original vertices that have been contracted into it, which is
//! how a partially solved instance encodes its partial assignment.

use crate::error::{CutError, Result};
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Per-vertex payload: the caller-visible id and the original vertices this
/// vertex now stands for.
#[derive(Debug, Clone)]
struct VertexData {
    id: usize,
    combined: BTreeSet<usize>,
}

/// An undirected graph with strictly positive edge capacities.
///
/// Invariants: no self-loops, at most one edge per vertex pair, and every
/// present edge has capacity > 0. Edges added with a non-positive capacity
/// are treated as absent and silently dropped.
///
/// # Example
///
/// ```
/// use ktcut::CutGraph;
///
/// let mut graph = CutGraph::new();
/// graph.add_edge(1, 2, 3.0);
/// graph.add_edge(2, 3, 2.0);
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.capacity(1, 2), Some(3.0));
///
/// graph.contract(1, 2).unwrap();
/// assert_eq!(graph.capacity(1, 3), Some(2.0));
/// assert!(graph.combined(1).contains(&2));
/// ```
#[derive(Debug, Clone)]
pub struct CutGraph {
    inner: StableUnGraph<VertexData, f64>,
    index: BTreeMap<usize, NodeIndex>,
}

impl Default for CutGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CutGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            inner: StableUnGraph::with_capacity(0, 0),
            index: BTreeMap::new(),
        }
    }

    /// Creates a graph from a list of weighted edges.
    ///
    /// Vertices are created on first mention. Repeated edges overwrite the
    /// earlier capacity; non-positive capacities are dropped.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut graph = Self::new();
        for (u, v, capacity) in edges {
            graph.add_edge(u, v, capacity);
        }
        graph
    }

    /// Creates a graph from unweighted edges, assigning capacity 1.0 to each.
    pub fn from_unit_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::from_weighted_edges(edges.into_iter().map(|(u, v)| (u, v, 1.0)))
    }

    /// Adds an isolated vertex. Does nothing if the vertex already exists.
    pub fn add_vertex(&mut self, v: usize) {
        if !self.index.contains_key(&v) {
            let ix = self.inner.add_node(VertexData {
                id: v,
                combined: BTreeSet::new(),
            });
            self.index.insert(v, ix);
        }
    }

    /// Adds an edge with the given capacity, creating endpoints as needed.
    ///
    /// Self-loops and non-positive capacities are ignored; an existing edge
    /// has its capacity overwritten.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: f64) {
        if u == v || capacity <= 0.0 {
            return;
        }
        self.add_vertex(u);
        self.add_vertex(v);
        let (ui, vi) = (self.index[&u], self.index[&v]);
        match self.inner.find_edge(ui, vi) {
            Some(e) => {
                if let Some(w) = self.inner.edge_weight_mut(e) {
                    *w = capacity;
                }
            }
            None => {
                self.inner.add_edge(ui, vi, capacity);
            }
        }
    }

    /// Adds an edge with the default capacity of 1.0.
    pub fn add_unit_edge(&mut self, u: usize, v: usize) {
        self.add_edge(u, v, 1.0);
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns true if the vertex is present.
    pub fn contains(&self, v: usize) -> bool {
        self.index.contains_key(&v)
    }

    /// Returns all vertex ids in ascending order.
    pub fn vertices(&self) -> Vec<usize> {
        self.index.keys().copied().collect()
    }

    /// Returns all edges as `(u, v, capacity)` with `u < v`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        let mut edges: Vec<(usize, usize, f64)> = self
            .inner
            .edge_indices()
            .map(|e| {
                let (a, b) = self.inner.edge_endpoints(e).expect("edge endpoints");
                let (u, v) = (self.inner[a].id, self.inner[b].id);
                let capacity = self.inner[e];
                if u < v {
                    (u, v, capacity)
                } else {
                    (v, u, capacity)
                }
            })
            .collect();
        edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        edges
    }

    /// Returns the neighbors of a vertex in ascending order.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        match self.index.get(&v) {
            Some(&ix) => {
                let mut out: Vec<usize> =
                    self.inner.neighbors(ix).map(|n| self.inner[n].id).collect();
                out.sort_unstable();
                out
            }
            None => Vec::new(),
        }
    }

    /// Returns the capacity of the edge between `u` and `v`, if present.
    pub fn capacity(&self, u: usize, v: usize) -> Option<f64> {
        let (&ui, &vi) = (self.index.get(&u)?, self.index.get(&v)?);
        let e = self.inner.find_edge(ui, vi)?;
        Some(self.inner[e])
    }

    /// Returns the total capacity of edges incident to `v`.
    pub fn weighted_degree(&self, v: usize) -> f64 {
        match self.index.get(&v) {
            Some(&ix) => self.inner.edges(ix).map(|e| *e.weight()).sum(),
            None => 0.0,
        }
    }

    /// Returns the set of original vertices contracted into `v` so far.
    pub fn combined(&self, v: usize) -> BTreeSet<usize> {
        self.index
            .get(&v)
            .map(|&ix| self.inner[ix].combined.clone())
            .unwrap_or_default()
    }

    /// Contracts a single vertex `v` into `u`.
    ///
    /// Edges from `v` are rerouted to `u`; a rerouted edge that lands on an
    /// existing edge of `u` adds its capacity to it. The edge between `u`
    /// and `v` disappears, and `v` (with everything previously contracted
    /// into it) is recorded in `u`'s combined set.
    pub fn contract(&mut self, u: usize, v: usize) -> Result<()> {
        let set = BTreeSet::from([v]);
        self.contract_set(u, &set)
    }

    /// Contracts every vertex of `vs` into `u`.
    ///
    /// Edges among `vs` are discarded (they would become self-loops on `u`);
    /// capacities of parallel rerouted edges are summed.
    ///
    /// Fails with [`CutError::InvalidContraction`] if `u` is in `vs`, and
    /// with [`CutError::InvalidInput`] if any vertex involved is missing.
    pub fn contract_set(&mut self, u: usize, vs: &BTreeSet<usize>) -> Result<()> {
        if vs.contains(&u) {
            return Err(CutError::InvalidContraction(u));
        }
        if !self.contains(u) {
            return Err(CutError::InvalidInput(format!(
                "vertex {u} is not in the graph"
            )));
        }
        for &v in vs {
            if !self.contains(v) {
                return Err(CutError::InvalidInput(format!(
                    "vertex {v} is not in the graph"
                )));
            }
        }

        let ui = self.index[&u];
        for &v in vs {
            let vi = self.index[&v];
            let rerouted: Vec<(usize, f64)> = self
                .inner
                .edges(vi)
                .map(|e| {
                    let w = if e.source() == vi { e.target() } else { e.source() };
                    (self.inner[w].id, *e.weight())
                })
                .filter(|(w, _)| *w != u && !vs.contains(w))
                .collect();
            for (w, capacity) in rerouted {
                let wi = self.index[&w];
                match self.inner.find_edge(ui, wi) {
                    Some(e) => {
                        if let Some(existing) = self.inner.edge_weight_mut(e) {
                            *existing += capacity;
                        }
                    }
                    None => {
                        self.inner.add_edge(ui, wi, capacity);
                    }
                }
            }
            let removed = self
                .inner
                .remove_node(vi)
                .expect("contracted vertex present");
            self.index.remove(&v);
            let target = &mut self.inner[ui].combined;
            target.insert(v);
            target.extend(removed.combined);
        }
        Ok(())
    }

    /// Total capacity of edges whose endpoints lie in different blocks of
    /// the given partition.
    ///
    /// Vertices missing from every block are treated as forming one extra
    /// shared block.
    pub fn cut_weight(&self, partition: &BTreeMap<usize, BTreeSet<usize>>) -> f64 {
        let mut block: HashMap<usize, usize> = HashMap::new();
        for (i, members) in partition.values().enumerate() {
            for &v in members {
                block.insert(v, i);
            }
        }
        self.edges()
            .iter()
            .filter(|(u, v, _)| block.get(u) != block.get(v))
            .map(|(_, _, capacity)| capacity)
            .sum()
    }

    /// Total capacity of all edges.
    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(|(_, _, c)| c).sum()
    }
}

#[cfg(test)]
#[path = "unit_tests/graph.rs"]
mod tests;
