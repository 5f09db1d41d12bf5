//! LP and IP formulations of the k-terminal cut problem.
//!
//! Vertex variables x_{i,k} for each vertex i and terminal k, edge
//! variables z_{ij,k} for each edge (i, j) and terminal k:
//!
//! ```text
//! minimize (1/2) sum_{(i,j) in E, k} c_ij * z_{ij,k}
//!   s.t.   sum_k x_{i,k} = 1                 for all i
//!          z_{ij,k} >= x_{i,k} - x_{j,k}     for all (i,j), k
//!          z_{ij,k} >= x_{j,k} - x_{i,k}     for all (i,j), k
//!          x_{k,k} = 1                       for all terminals k
//! ```
//!
//! The LP relaxation drives the persistence preprocessing; the IP is the
//! exact baseline the branch-and-bound solver is cross-checked against.

use crate::error::{CutError, Result};
use crate::graph::CutGraph;
use good_lp::{default_solver, variable, Expression, ProblemVariables, Solution, SolverModel};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Tolerance for reading 0/1 values out of a solved relaxation.
pub const ASSIGNMENT_TOLERANCE: f64 = 1e-5;

/// Builds and solves the LP/IP formulation for one instance.
pub struct CutFormulation<'g> {
    graph: &'g CutGraph,
    terminals: Vec<usize>,
}

/// A solved LP relaxation: the objective value and the fractional vertex
/// assignments x_{i,k}.
#[derive(Debug, Clone)]
pub struct LpRelaxation {
    /// Objective value of the relaxation (a lower bound on the optimal cut).
    pub cut_value: f64,
    vertices: Vec<usize>,
    terminals: Vec<usize>,
    assignments: HashMap<(usize, usize), f64>,
}

/// A solved integer program: the optimal cut value and the source set of
/// each terminal.
#[derive(Debug, Clone)]
pub struct IpSolution {
    /// Optimal cut value.
    pub cut_value: f64,
    /// Vertices assigned to each terminal, terminal included.
    pub source_sets: BTreeMap<usize, BTreeSet<usize>>,
}

impl<'g> CutFormulation<'g> {
    /// Validates the instance and prepares a formulation for it.
    pub fn new(graph: &'g CutGraph, terminals: &[usize]) -> Result<Self> {
        crate::solver::validate_instance(graph, terminals)?;
        Ok(Self {
            graph,
            terminals: terminals.to_vec(),
        })
    }

    /// Solves the LP relaxation.
    pub fn solve_lp(&self) -> Result<LpRelaxation> {
        let (cut_value, assignments) = self.solve_model(false)?;
        Ok(LpRelaxation {
            cut_value,
            vertices: self.graph.vertices(),
            terminals: self.terminals.clone(),
            assignments,
        })
    }

    /// Solves the integer program exactly.
    pub fn solve_ip(&self) -> Result<IpSolution> {
        let (cut_value, assignments) = self.solve_model(true)?;
        let mut source_sets: BTreeMap<usize, BTreeSet<usize>> = self
            .terminals
            .iter()
            .map(|&t| (t, BTreeSet::new()))
            .collect();
        for &i in &self.graph.vertices() {
            for &k in &self.terminals {
                if (assignments[&(i, k)] - 1.0).abs() <= ASSIGNMENT_TOLERANCE {
                    source_sets.get_mut(&k).expect("terminal key").insert(i);
                }
            }
        }
        Ok(IpSolution {
            cut_value,
            source_sets,
        })
    }

    fn solve_model(&self, integer: bool) -> Result<(f64, HashMap<(usize, usize), f64>)> {
        let vertices = self.graph.vertices();
        let edges = self.graph.edges();

        let mut builder = ProblemVariables::new();
        let mut x = HashMap::new();
        for &i in &vertices {
            for &k in &self.terminals {
                let def = if integer {
                    variable().integer().min(0.0).max(1.0)
                } else {
                    variable().min(0.0).max(1.0)
                };
                x.insert((i, k), builder.add(def));
            }
        }
        let mut z = HashMap::new();
        for &(i, j, _) in &edges {
            for &k in &self.terminals {
                let def = if integer {
                    variable().integer().min(0.0).max(1.0)
                } else {
                    variable().min(0.0).max(1.0)
                };
                z.insert((i, j, k), builder.add(def));
            }
        }

        let objective: Expression = edges
            .iter()
            .flat_map(|&(i, j, capacity)| {
                let z = &z;
                self.terminals
                    .iter()
                    .map(move |&k| 0.5 * capacity * z[&(i, j, k)])
            })
            .sum();

        let mut model = builder.minimise(&objective).using(default_solver);

        for &i in &vertices {
            let assigned: Expression = self
                .terminals
                .iter()
                .map(|&k| Expression::from(x[&(i, k)]))
                .sum();
            model = model.with(assigned.eq(1.0));
        }
        for &(i, j, _) in &edges {
            for &k in &self.terminals {
                let (zv, xi, xj) = (z[&(i, j, k)], x[&(i, k)], x[&(j, k)]);
                model = model.with((zv - xi + xj).geq(0.0));
                model = model.with((zv - xj + xi).geq(0.0));
            }
        }
        for &k in &self.terminals {
            model = model.with(Expression::from(x[&(k, k)]).eq(1.0));
        }

        let solution = model
            .solve()
            .map_err(|e| CutError::SolverFailure(e.to_string()))?;

        let assignments: HashMap<(usize, usize), f64> = x
            .iter()
            .map(|(&key, &var)| (key, solution.value(var)))
            .collect();
        Ok((solution.eval(&objective), assignments))
    }
}

impl LpRelaxation {
    /// The fractional assignment x_{i,k}, or 0.0 for unknown pairs.
    pub fn assignment(&self, vertex: usize, terminal: usize) -> f64 {
        self.assignments
            .get(&(vertex, terminal))
            .copied()
            .unwrap_or(0.0)
    }

    /// Weak persistence: a vertex whose x value rounds to 1 for some
    /// terminal is pinned to that terminal; every other vertex keeps the
    /// full terminal set.
    pub fn weak_candidates(&self) -> HashMap<usize, BTreeSet<usize>> {
        let all: BTreeSet<usize> = self.terminals.iter().copied().collect();
        self.vertices
            .iter()
            .map(|&i| {
                let pinned: BTreeSet<usize> = self
                    .terminals
                    .iter()
                    .copied()
                    .filter(|&k| (self.assignment(i, k) - 1.0).abs() <= ASSIGNMENT_TOLERANCE)
                    .collect();
                let candidates = if pinned.is_empty() { all.clone() } else { pinned };
                (i, candidates)
            })
            .collect()
    }

    /// Strong persistence: only terminals with strictly positive x value
    /// remain candidates. Zeros in the relaxation stay zero in some
    /// integral optimum, so the restriction preserves at least one optimal
    /// solution.
    pub fn strong_candidates(&self) -> HashMap<usize, BTreeSet<usize>> {
        let all: BTreeSet<usize> = self.terminals.iter().copied().collect();
        self.vertices
            .iter()
            .map(|&i| {
                let positive: BTreeSet<usize> = self
                    .terminals
                    .iter()
                    .copied()
                    .filter(|&k| self.assignment(i, k) > ASSIGNMENT_TOLERANCE)
                    .collect();
                let candidates = if positive.is_empty() { all.clone() } else { positive };
                (i, candidates)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "unit_tests/formulation.rs"]
mod tests;
