//! Graph engine: uniform edge sampling, connection, shape builders, text
//! output.
//!
//! [`UndirectedGraph`] and [`DirectedGraph`] share one core that owns the
//! adjacency manager, the labeler/weighter pair and the graph's generator.
//! Random edges are drawn by ranking the candidate-edge universe
//! ([`space::EdgeSpace`]), excluding the ranks already present and handing
//! the rest to the [`RangeSampler`].

mod directed;
mod space;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::adjacency::AdjacencyManager;
use crate::dsu::DisjointSet;
use crate::error::{GraphError, Result};
use crate::label::{Labeler, Weighter};
use crate::model::{Adjacency, VertexId};
use crate::random::XorShift64;
use crate::sampler::RangeSampler;

use space::EdgeSpace;

struct GraphCore<L, W> {
    n: usize,
    directed: bool,
    manager: AdjacencyManager,
    labeler: Labeler<L>,
    weighter: Option<Weighter<W>>,
    rng: XorShift64,
}

impl<L, W> GraphCore<L, W> {
    fn new(
        n: usize,
        directed: bool,
        labeler: Labeler<L>,
        weighter: Option<Weighter<W>>,
        rng: XorShift64,
    ) -> Self {
        assert!(
            n <= VertexId::MAX as usize,
            "vertex count exceeds the VertexId range"
        );
        Self {
            n,
            directed,
            manager: AdjacencyManager::new(n),
            labeler,
            weighter,
            rng,
        }
    }

    fn add_edge(&mut self, tail: VertexId, head: VertexId) -> Result<()> {
        self.manager.insert(Adjacency::new(tail, head))?;
        if !self.directed {
            self.manager.insert(Adjacency::new(head, tail))?;
        }
        Ok(())
    }

    fn edge_count(&self) -> usize {
        if self.directed {
            self.manager.len()
        } else {
            self.manager.len() / 2
        }
    }

    fn has_edge(&mut self, tail: VertexId, head: VertexId) -> bool {
        self.manager.contains(Adjacency::new(tail, head))
    }

    fn canonical_edges(&self, space: EdgeSpace) -> Vec<Adjacency> {
        self.manager
            .entries()
            .into_iter()
            .filter(|a| space.is_canonical(*a))
            .collect()
    }

    /// Ranks of the present canonical edges, ascending (lexicographic key
    /// order maps monotonically to rank order in both spaces).
    fn canonical_ranks(&self, space: EdgeSpace) -> Vec<u64> {
        self.manager
            .entries()
            .into_iter()
            .filter(|a| space.is_canonical(*a))
            .map(|a| space.edge_to_rank(a))
            .collect()
    }

    /// Adds exactly `count` edges drawn uniformly from the absent part of
    /// `space`.
    fn add_random_edges(&mut self, count: usize, space: EdgeSpace) -> Result<()> {
        let excluded = self.canonical_ranks(space);
        let universe = space.universe();
        if count as u64 + excluded.len() as u64 > universe {
            return Err(GraphError::TooManyEdges);
        }
        debug!(
            count,
            universe,
            occupied = excluded.len(),
            "sampling absent edges"
        );
        let sampler = RangeSampler::with_rng(count, 0, universe, excluded, &mut self.rng)?;
        for rank in &sampler {
            let edge = space.rank_to_edge(*rank);
            self.add_edge(edge.tail, edge.head)?;
        }
        Ok(())
    }

    /// Adds the minimum number of edges making the graph connected: one
    /// spanning-tree edge per extra component, attached uniformly at random.
    fn connect(&mut self) -> Result<()> {
        if self.n == 0 {
            return Ok(());
        }
        let mut components = DisjointSet::new(self.n);
        for adjacency in self.manager.entries() {
            components.merge(adjacency.tail as usize, adjacency.head as usize)?;
        }

        let mut vertices: Vec<VertexId> = (0..self.n as VertexId).collect();
        vertices.shuffle(&mut self.rng);

        // One representative per component, met in shuffled order.
        let anchor = vertices[0];
        let mut repr = vec![anchor];
        for &v in &vertices[1..] {
            if components.merge(anchor as usize, v as usize)? {
                repr.push(v);
            }
        }

        if repr.len() > 1 {
            debug!(components = repr.len(), "spanning components");
        }
        for i in 1..repr.len() {
            let j = self.rng.randrange(0, i as u64) as usize;
            self.add_edge(repr[j], repr[i])?;
        }
        Ok(())
    }

    /// The edge whose rank is the `k`-th one absent from `space`, matching
    /// the sampler's view of the complement.
    fn kth_absent(&self, k: usize, space: EdgeSpace) -> Result<Adjacency> {
        let excluded = self.canonical_ranks(space);
        let universe = space.universe();
        if k as u64 >= universe - excluded.len() as u64 {
            return Err(GraphError::InvalidArgument(format!(
                "absent-edge index {k} out of range"
            )));
        }
        let mut rank = k as u64;
        for &occupied in &excluded {
            if occupied <= rank {
                rank += 1;
            } else {
                break;
            }
        }
        Ok(space.rank_to_edge(rank))
    }

    fn build_path(&mut self) -> Result<()> {
        if self.n == 0 {
            return Err(GraphError::TooFewNodes);
        }
        for i in 0..self.n - 1 {
            self.add_edge(i as VertexId, (i + 1) as VertexId)?;
        }
        Ok(())
    }

    fn build_cycle(&mut self) -> Result<()> {
        if self.n < 3 {
            return Err(GraphError::TooFewNodes);
        }
        self.build_path()?;
        self.add_edge((self.n - 1) as VertexId, 0)
    }

    fn build_star(&mut self) -> Result<()> {
        if self.n < 2 {
            return Err(GraphError::TooFewNodes);
        }
        for i in 1..self.n {
            self.add_edge(0, i as VertexId)?;
        }
        Ok(())
    }

    fn build_wheel(&mut self) -> Result<()> {
        if self.n < 4 {
            return Err(GraphError::TooFewNodes);
        }
        for i in 1..self.n {
            self.add_edge((i - 1) as VertexId, i as VertexId)?;
            self.add_edge(0, i as VertexId)?;
        }
        self.add_edge((self.n - 1) as VertexId, 0)
    }

    fn build_clique(&mut self) -> Result<()> {
        if self.n == 0 {
            return Err(GraphError::TooFewNodes);
        }
        for i in 0..self.n {
            for j in i + 1..self.n {
                self.add_edge(i as VertexId, j as VertexId)?;
            }
        }
        Ok(())
    }

    /// Forest with `count` edges: each sampled vertex `v` hangs `v + 1`
    /// under a uniformly chosen earlier vertex.
    fn build_forest(&mut self, count: usize) -> Result<()> {
        if self.n == 0 {
            return if count == 0 {
                Ok(())
            } else {
                Err(GraphError::TooManyEdges)
            };
        }
        if count > self.n - 1 {
            return Err(GraphError::TooManyEdges);
        }
        let sampler =
            RangeSampler::with_rng(count, 0, (self.n - 1) as u64, Vec::new(), &mut self.rng)?;
        for v in &sampler {
            let parent = self.rng.randrange(0, *v + 1) as VertexId;
            self.add_edge(parent, (*v + 1) as VertexId)?;
        }
        Ok(())
    }

    fn build_tree(&mut self) -> Result<()> {
        if self.n == 0 {
            return Err(GraphError::TooFewNodes);
        }
        self.build_forest(self.n - 1)
    }
}

impl<L: std::fmt::Display, W: std::fmt::Display> GraphCore<L, W> {
    /// `"N E"` followed by one `"tail_label head_label[ weight]"` line per
    /// canonical edge, in randomized order, without a trailing newline.
    fn render(&mut self, space: EdgeSpace) -> String {
        let mut edges = self.canonical_edges(space);
        edges.shuffle(&mut self.rng);

        let mut lines = Vec::with_capacity(edges.len() + 1);
        lines.push(format!("{} {}", self.n, edges.len()));
        for edge in &edges {
            let mut line = format!(
                "{} {}",
                (self.labeler)(edge.tail),
                (self.labeler)(edge.head)
            );
            if let Some(weighter) = &self.weighter {
                line.push_str(&format!(" {}", weighter(edge)));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
