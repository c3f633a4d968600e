#![forbid(unsafe_code)]

//! Random-graph generation for competitive-programming test data.
//!
//! Graphs live in a rank-indexed adjacency store (an augmented splay tree
//! with a per-vertex range index), which lets `add_edges` draw uniformly
//! from the edges *not yet present* without ever listing them. All
//! randomness flows through a seedable xorshift generator, so a fixed seed
//! reproduces every graph bit for bit.

pub mod adjacency;
pub mod dsu;
pub mod error;
pub mod graph;
pub mod label;
pub mod model;
pub mod random;
pub mod sampler;

pub use crate::adjacency::{AdjacencyManager, AdjacencyTree, Cursor};
pub use crate::dsu::DisjointSet;
pub use crate::error::{GraphError, Result};
pub use crate::graph::{DirectedGraph, UndirectedGraph};
pub use crate::label::{
    iota_labeler, shuffled_labeler, static_labeler, uniform_weighter, uniform_weighter_f64,
    Labeler, Weighter,
};
pub use crate::model::{Adjacency, VertexId};
pub use crate::random::{srand, XorShift64};
pub use crate::sampler::RangeSampler;
