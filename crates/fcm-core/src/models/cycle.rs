use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::EdgeRef;

/// A simple cycle as an ordered sequence of distinct node indices.
///
/// Consecutive nodes are joined by an edge, and the last node links back to
/// the first. A single node is a self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(Vec<usize>);

impl Cycle {
    pub fn new(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_self_loop(&self) -> bool {
        self.0.len() == 1
    }

    /// Every edge of the cycle, including the wrap-around edge back to the start.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        let k = self.0.len();
        (0..k).map(move |i| EdgeRef::new(self.0[i], self.0[(i + 1) % k]))
    }
}

impl From<Vec<usize>> for Cycle {
    fn from(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Parity of the number of negative edges along a cycle.
/// Even cycles carry positive net feedback and are destabilizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn from_negative_count(count: usize) -> Self {
        if count % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    pub fn is_even(self) -> bool {
        self == Self::Even
    }
}
