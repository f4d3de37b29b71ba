//! Square adjacency matrix value type.
//!
//! Entry (i, j) is the weight of the directed edge i → j; zero means "no edge".
//! The matrix is stored row-major and serializes as a list of rows.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::models::EdgeRef;

/// A square n×n matrix of edge weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AdjacencyMatrix {
    n: usize,
    data: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Build a matrix from rows. Fails with a shape error unless every row has
    /// exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(GraphError::Shape {
                    rows: n,
                    row,
                    len: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// An n×n matrix with no edges.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of nodes (rows).
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.n && col < self.n {
            Some(self.data[row * self.n + col])
        } else {
            None
        }
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.n.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Number of nonzero entries, i.e. the edge count.
    pub fn nonzero_count(&self) -> usize {
        self.data.iter().filter(|w| **w != 0.0).count()
    }

    /// A copy of this matrix with the given entries set to zero.
    /// Out-of-range edges are ignored.
    pub fn with_edges_zeroed(&self, edges: &[EdgeRef]) -> Self {
        let mut next = self.clone();
        for edge in edges {
            if edge.source < self.n && edge.target < self.n {
                next.data[edge.source * self.n + edge.target] = 0.0;
            }
        }
        next
    }
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::zeros(0)
    }
}

impl TryFrom<Vec<Vec<f64>>> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<f64>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_rows()
    }
}
