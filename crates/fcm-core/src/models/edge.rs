use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed (source, target) pair identifying a matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRef {
    pub source: usize,
    pub target: usize,
}

impl EdgeRef {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Sign of an edge weight. Positive edges reinforce, negative edges inhibit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSign {
    Positive,
    Negative,
}

impl EdgeSign {
    pub fn of(weight: f64) -> Self {
        if weight < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// An edge with its sign and endpoint names, ready for visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub sign: EdgeSign,
    pub source_name: String,
    pub target_name: String,
}
