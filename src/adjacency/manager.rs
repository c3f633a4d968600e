use tracing::trace;

use crate::error::{GraphError, Result};
use crate::model::{Adjacency, VertexId};

use super::cursor::Cursor;
use super::tree::AdjacencyTree;

#[derive(Debug, Clone, Copy)]
struct TailRange {
    first: Cursor,
    last: Cursor,
}

/// Adjacency tree plus a per-tail index of extremal positions.
///
/// For every vertex `u` that appears as a tail, the index caches cursors to
/// the lexicographically smallest and largest adjacency `(u, _)`, so the
/// out-neighbor range of `u` opens without a tree search. The manager also
/// owns argument validation: vertex bounds and the no-self-loop rule live
/// here, the tree below never fails.
pub struct AdjacencyManager {
    tree: AdjacencyTree,
    ranges: Vec<Option<TailRange>>,
}

impl AdjacencyManager {
    pub fn new(n_vertices: usize) -> Self {
        Self {
            tree: AdjacencyTree::new(),
            ranges: vec![None; n_vertices],
        }
    }

    pub fn n_vertices(&self) -> usize {
        self.ranges.len()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Inserts `adjacency`. Re-inserting a present adjacency is a no-op that
    /// returns its existing cursor.
    pub fn insert(&mut self, adjacency: Adjacency) -> Result<Cursor> {
        self.check_vertex(adjacency.tail)?;
        self.check_vertex(adjacency.head)?;
        if adjacency.tail == adjacency.head {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop at vertex {}",
                adjacency.tail
            )));
        }

        let cursor = self.tree.insert(adjacency);
        let tail = adjacency.tail as usize;
        match self.ranges[tail] {
            None => {
                trace!(tail = adjacency.tail, "opening tail range");
                self.ranges[tail] = Some(TailRange {
                    first: cursor,
                    last: cursor,
                });
            }
            Some(range) => {
                let mut range = range;
                if self.tree.get(range.first).is_some_and(|a| adjacency < *a) {
                    range.first = cursor;
                }
                if self.tree.get(range.last).is_some_and(|a| adjacency > *a) {
                    range.last = cursor;
                }
                self.ranges[tail] = Some(range);
            }
        }
        Ok(cursor)
    }

    /// Removes `adjacency` if present; absent adjacencies are a no-op.
    pub fn erase(&mut self, adjacency: Adjacency) -> Result<()> {
        self.check_vertex(adjacency.tail)?;
        self.check_vertex(adjacency.head)?;
        let cursor = self.tree.find(adjacency);
        if !cursor.is_end() {
            self.erase_at(cursor);
        }
        Ok(())
    }

    /// Removes the node under `cursor`, keeping the tail index current: the
    /// sole adjacency of a tail drops its index entry, an extremal one hands
    /// its slot to its in-order neighbor.
    pub fn erase_at(&mut self, cursor: Cursor) {
        let Some(&adjacency) = self.tree.get(cursor) else {
            return;
        };
        let tail = adjacency.tail as usize;
        if let Some(range) = self.ranges[tail] {
            if range.first == range.last {
                self.ranges[tail] = None;
            } else if cursor == range.first {
                let first = self.tree.next(cursor);
                self.ranges[tail] = Some(TailRange { first, ..range });
            } else if cursor == range.last {
                let last = self.tree.prev(cursor);
                self.ranges[tail] = Some(TailRange { last, ..range });
            }
        }
        self.tree.erase(cursor);
    }

    pub fn find(&mut self, adjacency: Adjacency) -> Cursor {
        self.tree.find(adjacency)
    }

    pub fn contains(&mut self, adjacency: Adjacency) -> bool {
        self.tree.contains(adjacency)
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Adjacency> {
        self.tree.get(cursor)
    }

    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// First adjacency with tail `u`, or `end()` when `u` has none.
    pub fn begin_of(&self, u: VertexId) -> Cursor {
        match self.ranges.get(u as usize) {
            Some(Some(range)) => range.first,
            _ => Cursor::END,
        }
    }

    /// Past-the-end of `u`'s range: the successor of the largest adjacency
    /// with tail `u`, or `end()` when `u` has none.
    pub fn end_of(&mut self, u: VertexId) -> Cursor {
        match self.ranges.get(u as usize) {
            Some(Some(range)) => {
                let last = range.last;
                self.tree.next(last)
            }
            _ => Cursor::END,
        }
    }

    /// Iterates the adjacencies with tail `u` in ascending head order.
    pub fn out_neighbors(&mut self, u: VertexId) -> OutNeighbors<'_> {
        let cursor = self.begin_of(u);
        OutNeighbors {
            tree: &mut self.tree,
            cursor,
            tail: u,
        }
    }

    pub fn next(&mut self, cursor: Cursor) -> Cursor {
        self.tree.next(cursor)
    }

    pub fn prev(&mut self, cursor: Cursor) -> Cursor {
        self.tree.prev(cursor)
    }

    pub fn advance(&mut self, cursor: Cursor, delta: isize) -> Cursor {
        self.tree.advance(cursor, delta)
    }

    pub fn distance(&mut self, a: Cursor, b: Cursor) -> isize {
        self.tree.distance(a, b)
    }

    /// 1-based in-order position of the adjacency under `cursor`.
    pub fn rank(&mut self, cursor: Cursor) -> usize {
        self.tree.rank(cursor)
    }

    /// The `k`-th stored adjacency, 0-based.
    pub fn kth_present(&self, k: usize) -> Cursor {
        self.tree.select(k + 1)
    }

    /// All adjacencies in key order.
    pub fn entries(&self) -> Vec<Adjacency> {
        self.tree.entries()
    }

    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if (v as usize) < self.ranges.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument(format!(
                "vertex {v} out of range for {} vertices",
                self.ranges.len()
            )))
        }
    }

    #[cfg(test)]
    pub(super) fn tree(&self) -> &AdjacencyTree {
        &self.tree
    }
}

/// Streaming view over one tail's adjacencies; see
/// [`AdjacencyManager::out_neighbors`].
pub struct OutNeighbors<'a> {
    tree: &'a mut AdjacencyTree,
    cursor: Cursor,
    tail: VertexId,
}

impl Iterator for OutNeighbors<'_> {
    type Item = Adjacency;

    fn next(&mut self) -> Option<Adjacency> {
        let adjacency = *self.tree.get(self.cursor)?;
        if adjacency.tail != self.tail {
            return None;
        }
        self.cursor = self.tree.next(self.cursor);
        Some(adjacency)
    }
}
