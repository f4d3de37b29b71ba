use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::FcmResult;
use crate::matrix::AdjacencyMatrix;

/// A matrix together with optional display names keyed by node index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabeledMatrix {
    pub matrix: AdjacencyMatrix,
    #[serde(default)]
    pub names: BTreeMap<usize, String>,
}

impl LabeledMatrix {
    pub fn new(matrix: AdjacencyMatrix) -> Self {
        Self {
            matrix,
            names: BTreeMap::new(),
        }
    }

    pub fn with_names(mut self, names: BTreeMap<usize, String>) -> Self {
        self.names = names;
        self
    }
}

/// Supplies the input matrix. Implemented by tabular loaders (CSV, spreadsheet,
/// whitespace-delimited text) that live outside this workspace.
pub trait MatrixSource {
    fn load(&self) -> FcmResult<LabeledMatrix>;
}

impl MatrixSource for LabeledMatrix {
    fn load(&self) -> FcmResult<LabeledMatrix> {
        Ok(self.clone())
    }
}
