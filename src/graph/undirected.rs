use std::fmt::Display;

use crate::error::Result;
use crate::label::{iota_labeler, Labeler, Weighter};
use crate::model::{Adjacency, VertexId};
use crate::random::{self, XorShift64};

use super::space::EdgeSpace;
use super::GraphCore;

/// Undirected graph over `n` vertices.
///
/// Every edge is stored as two mirrored adjacencies; the `tail > head` half
/// is the canonical one used for ranking and output. `L` and `W` are the
/// printed label and weight types.
pub struct UndirectedGraph<L = i64, W = i64> {
    core: GraphCore<L, W>,
}

impl UndirectedGraph<i64, i64> {
    /// Graph labeled `0..n`, unweighted, seeded from the process-wide
    /// generator (see [`crate::srand`]).
    pub fn new(n: usize) -> Self {
        Self::with_rng(n, random::fork_rng())
    }

    pub fn with_rng(n: usize, rng: XorShift64) -> Self {
        Self {
            core: GraphCore::new(n, false, iota_labeler(0), None, rng),
        }
    }
}

impl<L: Display, W: Display> UndirectedGraph<L, W> {
    pub fn with_parts(
        n: usize,
        labeler: Labeler<L>,
        weighter: Option<Weighter<W>>,
        rng: XorShift64,
    ) -> Self {
        Self {
            core: GraphCore::new(n, false, labeler, weighter, rng),
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

    /// The canonical (`tail > head`) edges, in key order.
    pub fn edges(&self) -> Vec<Adjacency> {
        self.core.canonical_edges(self.space())
    }

    pub fn has_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        self.core.has_edge(a, b)
    }

    /// Inserts the edge `{a, b}` (both orientations). Present edges are a
    /// no-op.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<()> {
        self.core.add_edge(a, b)
    }

    /// Adds exactly `count` edges drawn uniformly from the absent ones.
    pub fn add_edges(&mut self, count: usize) -> Result<()> {
        let space = self.space();
        self.core.add_random_edges(count, space)
    }

    /// Adds the minimum number of edges making the graph connected. A no-op
    /// on an already connected graph.
    pub fn connect(&mut self) -> Result<()> {
        self.core.connect()
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
        EdgeSpace::triangular(self.core.n)
    }
}
