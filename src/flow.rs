//! Maximum flow over a residual arc network.
//!
//! Blocking-flow (Dinic) implementation with `f64` capacities. Arcs are
//! stored in pairs so that arc `a ^ 1` is the reverse of arc `a`; pushing
//! flow moves residual capacity from an arc to its pair. Infinite-capacity
//! arcs are supported for super-source and super-sink attachment.

use std::collections::VecDeque;

/// Residual capacity below this is treated as saturated. Tolerates the
/// rounding that accumulates when capacities are not integral.
pub(crate) const RESIDUAL_EPS: f64 = 1e-10;

#[derive(Debug, Clone, Copy)]
struct Arc {
    to: u32,
    residual: f64,
}

/// A flow network over vertices `0..n` built for a single max-flow run.
#[derive(Debug, Clone)]
pub(crate) struct FlowNetwork {
    adj: Vec<Vec<u32>>,
    arcs: Vec<Arc>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            arcs: Vec::new(),
        }
    }

    /// Adds a directed arc with the given capacity and a paired reverse arc
    /// with capacity `backward`. An undirected edge of capacity `c` is the
    /// pair `(c, c)`; a one-way arc is `(c, 0.0)`.
    pub fn add_arc(&mut self, from: usize, to: usize, forward: f64, backward: f64) {
        let id = self.arcs.len() as u32;
        self.arcs.push(Arc {
            to: to as u32,
            residual: forward,
        });
        self.arcs.push(Arc {
            to: from as u32,
            residual: backward,
        });
        self.adj[from].push(id);
        self.adj[to].push(id + 1);
    }

    /// Computes the maximum flow from `source` to `sink`, mutating the
    /// residual capacities in place.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> f64 {
        let n = self.adj.len();
        let mut total = 0.0;
        let mut level = vec![0u32; n];
        while self.bfs_levels(source, sink, &mut level) {
            let mut iter = vec![0usize; n];
            loop {
                let pushed = self.augment(source, sink, f64::INFINITY, &level, &mut iter);
                if pushed <= 0.0 {
                    break;
                }
                total += pushed;
            }
        }
        total
    }

    /// Labels vertices with BFS distance from `source` over unsaturated
    /// arcs. Returns whether `sink` is reachable.
    fn bfs_levels(&self, source: usize, sink: usize, level: &mut [u32]) -> bool {
        level.fill(0);
        level[source] = 1;
        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for &a in &self.adj[v] {
                let arc = self.arcs[a as usize];
                let to = arc.to as usize;
                if arc.residual > RESIDUAL_EPS && level[to] == 0 {
                    level[to] = level[v] + 1;
                    queue.push_back(to);
                }
            }
        }
        level[sink] != 0
    }

    /// Pushes one augmenting path along the level graph, returning the
    /// bottleneck amount (0.0 when no path remains).
    fn augment(
        &mut self,
        v: usize,
        sink: usize,
        limit: f64,
        level: &[u32],
        iter: &mut [usize],
    ) -> f64 {
        if v == sink {
            return limit;
        }
        while iter[v] < self.adj[v].len() {
            let a = self.adj[v][iter[v]] as usize;
            let Arc { to, residual } = self.arcs[a];
            let to = to as usize;
            if residual > RESIDUAL_EPS && level[to] == level[v] + 1 {
                let pushed = self.augment(to, sink, limit.min(residual), level, iter);
                if pushed > 0.0 {
                    self.arcs[a].residual -= pushed;
                    self.arcs[a ^ 1].residual += pushed;
                    return pushed;
                }
            }
            iter[v] += 1;
        }
        0.0
    }

    /// After a max-flow run, returns the set of vertices from which `sink`
    /// is still reachable in the residual network, as a membership mask.
    ///
    /// Saturated arcs (residual at most [`RESIDUAL_EPS`]) are excluded, so
    /// the complement of the returned set is the source-maximal minimum cut
    /// source side.
    pub fn residual_sink_side(&self, sink: usize) -> Vec<bool> {
        let mut member = vec![false; self.adj.len()];
        member[sink] = true;
        let mut queue = VecDeque::from([sink]);
        while let Some(x) = queue.pop_front() {
            for &a in &self.adj[x] {
                let a = a as usize;
                let y = self.arcs[a].to as usize;
                // arc a runs x -> y, so its pair runs y -> x
                if !member[y] && self.arcs[a ^ 1].residual > RESIDUAL_EPS {
                    member[y] = true;
                    queue.push_back(y);
                }
            }
        }
        member
    }
}

#[cfg(test)]
#[path = "unit_tests/flow.rs"]
mod tests;
