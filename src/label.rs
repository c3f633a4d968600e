//! Label and weight assignment plugged into serialization.
//!
//! A labeler is a deterministic injection from vertex ids to printed labels;
//! a weighter is a deterministic map from an adjacency to its printed
//! weight. Both are plain boxed closures held by the graph; the helpers here
//! build the common ones.

use rand::seq::SliceRandom;

use crate::model::{Adjacency, VertexId};
use crate::random::XorShift64;

pub type Labeler<L> = Box<dyn Fn(VertexId) -> L>;
pub type Weighter<W> = Box<dyn Fn(&Adjacency) -> W>;

/// Labels vertex `i` as `start + i`.
pub fn iota_labeler(start: i64) -> Labeler<i64> {
    Box::new(move |v| start + v as i64)
}

/// Distinct labels drawn from `[start, end)` in a random order.
///
/// The table is shuffled once at construction, so the labeler stays a
/// deterministic injection. The range must cover at least as many values as
/// the graph has vertices.
pub fn shuffled_labeler(start: i64, end: i64, rng: &mut XorShift64) -> Labeler<i64> {
    let mut labels: Vec<i64> = (start..end).collect();
    labels.shuffle(rng);
    Box::new(move |v| labels[v as usize])
}

/// Labels from a caller-supplied table, indexed by vertex id.
pub fn static_labeler<L: Clone + 'static>(labels: Vec<L>) -> Labeler<L> {
    Box::new(move |v| labels[v as usize].clone())
}

/// Uniform integer weight in `[min, max)`, deterministic per adjacency.
pub fn uniform_weighter(min: i64, max: i64, seed: u64) -> Weighter<i64> {
    Box::new(move |adjacency| {
        let mut rng = XorShift64::new(seed ^ adjacency_key(adjacency));
        min + rng.randrange(0, (max - min) as u64) as i64
    })
}

/// Uniform real weight in `[min, max)`, deterministic per adjacency.
pub fn uniform_weighter_f64(min: f64, max: f64, seed: u64) -> Weighter<f64> {
    Box::new(move |adjacency| {
        let mut rng = XorShift64::new(seed ^ adjacency_key(adjacency));
        rng.randrange_f64(min, max)
    })
}

fn adjacency_key(adjacency: &Adjacency) -> u64 {
    ((adjacency.tail as u64) << 32) | adjacency.head as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iota_labels_count_up() {
        let label = iota_labeler(10);
        assert_eq!(label(0), 10);
        assert_eq!(label(7), 17);
    }

    #[test]
    fn shuffled_labels_are_a_permutation() {
        let mut rng = XorShift64::new(3);
        let label = shuffled_labeler(100, 120, &mut rng);
        let mut seen: Vec<i64> = (0..20).map(|v| label(v)).collect();
        seen.sort_unstable();
        assert_eq!(seen, (100..120).collect::<Vec<_>>());
    }

    #[test]
    fn static_labels_index_the_table() {
        let label = static_labeler(vec!["a", "b", "c"]);
        assert_eq!(label(2), "c");
    }

    #[test]
    fn uniform_weights_are_deterministic_per_edge() {
        let weight = uniform_weighter(1, 100, 99);
        let edge = Adjacency::new(3, 7);
        assert_eq!(weight(&edge), weight(&edge));
        let w = weight(&edge);
        assert!((1..100).contains(&w));

        let again = uniform_weighter(1, 100, 99);
        assert_eq!(again(&edge), w);
    }
}
