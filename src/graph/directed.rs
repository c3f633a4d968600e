use std::fmt::Display;

use crate::error::{GraphError, Result};
use crate::label::{iota_labeler, Labeler, Weighter};
use crate::model::{Adjacency, VertexId};
use crate::random::{self, XorShift64};

use super::space::EdgeSpace;
use super::GraphCore;

/// Directed graph over `n` vertices.
///
/// Each edge is a single adjacency; every off-diagonal pair is a candidate.
/// `L` and `W` are the printed label and weight types.
pub struct DirectedGraph<L = i64, W = i64> {
    core: GraphCore<L, W>,
}

impl DirectedGraph<i64, i64> {
    /// Graph labeled `0..n`, unweighted, seeded from the process-wide
    /// generator (see [`crate::srand`]).
    pub fn new(n: usize) -> Self {
        Self::with_rng(n, random::fork_rng())
    }

    pub fn with_rng(n: usize, rng: XorShift64) -> Self {
        Self {
            core: GraphCore::new(n, true, iota_labeler(0), None, rng),
        }
    }
}

impl<L: Display, W: Display> DirectedGraph<L, W> {
    pub fn with_parts(
        n: usize,
        labeler: Labeler<L>,
        weighter: Option<Weighter<W>>,
        rng: XorShift64,
    ) -> Self {
        Self {
            core: GraphCore::new(n, true, labeler, weighter, rng),
        }
    }

    pub fn set_labeler(&mut self, labeler: Labeler<L>) {
        self.core.labeler = labeler;
    }

    pub fn set_weighter(&mut self, weighter: Weighter<W>) {
        self.core.weighter = Some(weighter);
    }

    pub fn vertex_count(&self) -> usize {
        self.core.n
    }

    pub fn edge_count(&self) -> usize {
        self.core.edge_count()
    }

    /// All edges, in key order.
    pub fn edges(&self) -> Vec<Adjacency> {
        self.core.canonical_edges(self.space())
    }

    pub fn has_edge(&mut self, tail: VertexId, head: VertexId) -> bool {
        self.core.has_edge(tail, head)
    }

    /// Inserts the edge `tail -> head`. Present edges are a no-op.
    pub fn add_edge(&mut self, tail: VertexId, head: VertexId) -> Result<()> {
        self.core.add_edge(tail, head)
    }

    /// Adds exactly `count` edges drawn uniformly from the absent ones.
    pub fn add_edges(&mut self, count: usize) -> Result<()> {
        let space = self.space();
        self.core.add_random_edges(count, space)
    }

    /// Adds `count` uniformly drawn DAG edges: the triangular space with
    /// every edge running from the higher index to the lower.
    pub fn build_dag(&mut self, count: usize) -> Result<()> {
        self.core
            .add_random_edges(count, EdgeSpace::triangular(self.core.n))
    }

    /// Strongly connecting a digraph with a minimum edge set is not
    /// implemented; this always fails.
    pub fn connect(&mut self) -> Result<()> {
        Err(GraphError::NotImplemented(
            "strongly connecting a directed graph",
        ))
    }

    /// The `k`-th absent edge, in rank order.
    pub fn kth_absent(&self, k: usize) -> Result<Adjacency> {
        self.core.kth_absent(k, self.space())
    }

    pub fn build_path(&mut self) -> Result<()> {
        self.core.build_path()
    }

    pub fn build_cycle(&mut self) -> Result<()> {
        self.core.build_cycle()
    }

    pub fn build_star(&mut self) -> Result<()> {
        self.core.build_star()
    }

    pub fn build_wheel(&mut self) -> Result<()> {
        self.core.build_wheel()
    }

    pub fn build_clique(&mut self) -> Result<()> {
        self.core.build_clique()
    }

    pub fn build_tree(&mut self) -> Result<()> {
        self.core.build_tree()
    }

    pub fn build_forest(&mut self, count: usize) -> Result<()> {
        self.core.build_forest(count)
    }

    /// Renders `"N E"` plus one labeled line per edge, in randomized order,
    /// with no trailing newline.
    pub fn to_string(&mut self) -> String {
        let space = self.space();
        self.core.render(space)
    }

    fn space(&self) -> EdgeSpace {
        EdgeSpace::off_diagonal(self.core.n)
    }
}
