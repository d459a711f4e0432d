//! Utility types and algorithms for working with relations.
//!
//! Most relation algorithms only ever look at pairs. The helpers here index those pairs so that
//! chained lookups, as in composition and transitivity, don't need to scan the whole relation.

use crate::prelude::*;

/// Assigns an increasing index to a `key` added to a tree, or returns the existing index.
pub(crate) fn btree_index<K: Ord>(tree: &mut BTreeMap<K, usize>, key: K) -> usize {
    let len = tree.len();
    match tree.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(len);
            len
        }
        Entry::Occupied(entry) => *entry.get(),
    }
}

/// Groups pairs by their first component, mapping each a to every b with (a, b) in the pairs.
pub(crate) fn index_by_first<'a, A, B, I>(pairs: I) -> BTreeMap<&'a A, SmallVec<&'a B>>
where
    A: Ord + 'a,
    B: 'a,
    I: IntoIterator<Item = &'a (A, B)>,
{
    let mut index: BTreeMap<_, SmallVec<_>> = BTreeMap::new();
    for (a, b) in pairs {
        index.entry(a).or_default().push(b);
    }
    index
}

// -------------------- BitMatrix -------------------- //

/// A square boolean matrix, used as the adjacency matrix of a homogeneous relation over the
/// indices `0..n`.
///
/// ## Invariants
///
/// Every row has the same length as the number of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatrix {
    /// The rows of the matrix. Entry `j` of row `i` is set iff `i` relates to `j`.
    rows: Vec<BitVec>,
}

impl BitMatrix {
    /// The all-false `n × n` matrix.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![bitvec![0; n]; n],
        }
    }

    /// The number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads entry `(i, j)`. Out of bounds entries read as `false`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .is_some_and(|row| row.get(j).is_some_and(|bit| *bit))
    }

    /// Sets entry `(i, j)`. Out of bounds entries are ignored.
    pub fn set(&mut self, i: usize, j: usize) {
        if let Some(row) = self.rows.get_mut(i) {
            if j < row.len() {
                row.set(j, true);
            }
        }
    }

    /// Replaces the matrix by its [transitive
    /// closure](https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm), via Warshall's
    /// algorithm.
    pub fn close_transitive(&mut self) {
        for k in 0..self.len() {
            // Row k is unchanged while processing k, since it can only absorb itself.
            let row_k = self.rows[k].clone();
            for row in &mut self.rows {
                if row[k] {
                    for j in row_k.iter_ones() {
                        row.set(j, true);
                    }
                }
            }
        }
    }

    /// Iterates over all set entries, row by row.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter_ones().map(move |j| (i, j)))
    }
}

/// Tests for the utilities.
#[cfg(test)]
mod utils {
    use super::*;

    #[test]
    fn index() {
        let mut tree = BTreeMap::new();
        assert_eq!(btree_index(&mut tree, 'b'), 0);
        assert_eq!(btree_index(&mut tree, 'a'), 1);
        assert_eq!(btree_index(&mut tree, 'b'), 0);
    }

    #[test]
    fn by_first() {
        let pairs = [(1, 'a'), (2, 'b'), (1, 'c')];
        let index = index_by_first(&pairs);
        assert_eq!(index[&1].as_slice(), &[&'a', &'c']);
        assert_eq!(index[&2].as_slice(), &[&'b']);
        assert!(!index.contains_key(&3));
    }

    #[test]
    fn closure() {
        // A path 0 → 1 → 2 → 3 plus a loop on 4.
        let mut matrix = BitMatrix::new(5);
        for (i, j) in [(0, 1), (1, 2), (2, 3), (4, 4)] {
            matrix.set(i, j);
        }
        matrix.close_transitive();

        let ones: Vec<_> = matrix.iter_ones().collect();
        assert_eq!(
            ones,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (4, 4)]
        );
        assert!(!matrix.get(3, 0));
        assert!(!matrix.get(7, 7));
    }

    #[test]
    fn closure_cycle() {
        let mut matrix = BitMatrix::new(3);
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            matrix.set(i, j);
        }
        matrix.close_transitive();
        assert_eq!(matrix.iter_ones().count(), 9);
    }
}
