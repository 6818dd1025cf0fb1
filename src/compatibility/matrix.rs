use serde::Serialize;

/// Sparse symmetric compatibility matrix stored as adjacency lists.
///
/// Row `i` lists the edges compatible with `i` in ascending index order along
/// with their scores. Absent entries are zero; the diagonal is always absent.
#[derive(Clone, Debug, Default)]
pub struct CompatibilityMatrix {
    neighbors: Vec<Vec<usize>>,
    scores: Vec<Vec<f64>>,
}

impl CompatibilityMatrix {
    /// Matrix over `n` edges with no compatible pairs.
    pub fn empty(n: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); n],
            scores: vec![Vec::new(); n],
        }
    }

    /// Mirrors per-row upper-triangle entries (`j > i`, ascending) into full
    /// rows. Rows stay sorted: row `j` receives every `i < j` before its own
    /// upper entries are appended.
    pub(crate) fn from_upper_rows(upper: Vec<Vec<(usize, f64)>>) -> Self {
        let n = upper.len();
        let mut matrix = Self::empty(n);
        for (i, row) in upper.into_iter().enumerate() {
            for (j, score) in row {
                debug_assert!(j > i && j < n);
                matrix.neighbors[i].push(j);
                matrix.scores[i].push(score);
                matrix.neighbors[j].push(i);
                matrix.scores[j].push(score);
            }
        }
        matrix
    }

    /// Number of edges (rows).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Edges compatible with `edge`, ascending.
    pub fn neighbors(&self, edge: usize) -> &[usize] {
        &self.neighbors[edge]
    }

    /// Scores matching [`neighbors`](Self::neighbors) entry for entry.
    pub fn scores(&self, edge: usize) -> &[f64] {
        &self.scores[edge]
    }

    /// Score of the pair `(i, j)`, zero when absent.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        match self.neighbors[i].binary_search(&j) {
            Ok(pos) => self.scores[i][pos],
            Err(_) => 0.0,
        }
    }

    /// Stored (directed) entries; twice the number of compatible pairs.
    pub fn nnz(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Unordered compatible pairs.
    pub fn pair_count(&self) -> usize {
        self.nnz() / 2
    }
}

/// Pair counts describing how much work early filtering saved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityStats {
    /// `n (n - 1) / 2`.
    pub total_pairs: usize,
    /// Pairs passing angle, scale and position; visibility was evaluated.
    pub candidate_pairs: usize,
    /// Pairs whose final score reached the threshold.
    pub compatible_pairs: usize,
}

impl CompatibilityStats {
    /// Fraction of pairs skipped before the visibility test.
    pub fn filtered_fraction(&self) -> f64 {
        if self.total_pairs == 0 {
            0.0
        } else {
            1.0 - self.candidate_pairs as f64 / self.total_pairs as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_rows_are_sorted_and_symmetric() {
        let upper = vec![
            vec![(1, 0.9), (3, 0.7)],
            vec![(2, 0.8)],
            vec![(3, 0.65)],
            vec![],
        ];
        let m = CompatibilityMatrix::from_upper_rows(upper);
        assert_eq!(m.neighbors(0), &[1, 3]);
        assert_eq!(m.neighbors(1), &[0, 2]);
        assert_eq!(m.neighbors(2), &[1, 3]);
        assert_eq!(m.neighbors(3), &[0, 2]);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert_eq!(m.get(2, 3), 0.65);
        assert_eq!(m.pair_count(), 4);
    }

    #[test]
    fn filtered_fraction_handles_empty_input() {
        assert_eq!(CompatibilityStats::default().filtered_fraction(), 0.0);
        let stats = CompatibilityStats {
            total_pairs: 10,
            candidate_pairs: 2,
            compatible_pairs: 1,
        };
        assert!((stats.filtered_fraction() - 0.8).abs() < 1e-12);
    }
}
