//! Immutable graph view over an adjacency matrix.

use std::collections::BTreeMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use fcm_core::config::defaults;
use fcm_core::errors::{FcmResult, GraphError};
use fcm_core::models::{EdgeSign, SignedEdge};
use fcm_core::traits::LabeledMatrix;
use fcm_core::AdjacencyMatrix;

/// The underlying directed graph type. Node weights are display names.
pub type WeightedDiGraph = DiGraph<String, f64>;

/// A weighted directed graph built from a square matrix.
///
/// Holds its own copy of the matrix. Node `i` of the petgraph graph is matrix
/// row `i`.
#[derive(Debug, Clone)]
pub struct GraphModel {
    matrix: AdjacencyMatrix,
    names: Vec<String>,
    /// Nonzero entries keyed by (source, target).
    edges: BTreeMap<(usize, usize), f64>,
    /// Ascending successor lists.
    successors: Vec<Vec<usize>>,
    graph: WeightedDiGraph,
}

impl GraphModel {
    /// Build from a matrix. Indices missing from `names` get `V{index+1}`.
    pub fn new(matrix: &AdjacencyMatrix, names: &BTreeMap<usize, String>) -> Self {
        let n = matrix.size();
        let names: Vec<String> = (0..n)
            .map(|i| {
                names
                    .get(&i)
                    .cloned()
                    .unwrap_or_else(|| default_name(i))
            })
            .collect();

        let mut graph = WeightedDiGraph::with_capacity(n, matrix.nonzero_count());
        for name in &names {
            graph.add_node(name.clone());
        }

        let mut edges = BTreeMap::new();
        let mut successors = vec![Vec::new(); n];
        for (src, row) in matrix.rows().enumerate() {
            for (dst, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    edges.insert((src, dst), weight);
                    successors[src].push(dst);
                    graph.add_edge(NodeIndex::new(src), NodeIndex::new(dst), weight);
                }
            }
        }

        Self {
            matrix: matrix.clone(),
            names,
            edges,
            successors,
            graph,
        }
    }

    /// Build from raw rows, failing with a shape error if they are not square.
    pub fn from_rows(rows: Vec<Vec<f64>>, names: &BTreeMap<usize, String>) -> FcmResult<Self> {
        let matrix = AdjacencyMatrix::from_rows(rows)?;
        Ok(Self::new(&matrix, names))
    }

    pub fn from_labeled(labeled: &LabeledMatrix) -> Self {
        Self::new(&labeled.matrix, &labeled.names)
    }

    /// A copy of the adjacency matrix.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        self.matrix.clone()
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges as (source, target, weight) in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.edges.iter().map(|(&(src, dst), &w)| (src, dst, w))
    }

    /// Weight of the edge `src → dst`.
    pub fn weight(&self, src: usize, dst: usize) -> Result<f64, GraphError> {
        self.edges
            .get(&(src, dst))
            .copied()
            .ok_or(GraphError::NoSuchEdge { src, dst })
    }

    /// Display name of a node.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Successors of `node` in ascending index order.
    pub fn successors(&self, node: usize) -> &[usize] {
        self.successors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Edges with sign and endpoint names, for visualization.
    pub fn signed_edges(&self) -> Vec<SignedEdge> {
        self.edges()
            .map(|(src, dst, weight)| SignedEdge {
                source: src,
                target: dst,
                weight,
                sign: EdgeSign::of(weight),
                source_name: self.names[src].clone(),
                target_name: self.names[dst].clone(),
            })
            .collect()
    }

    /// Strongly connected component id per node.
    /// Two nodes share an id iff each can reach the other.
    pub fn component_ids(&self) -> Vec<usize> {
        let mut ids = vec![0; self.node_count()];
        for (component, members) in tarjan_scc(&self.graph).into_iter().enumerate() {
            for node in members {
                ids[node.index()] = component;
            }
        }
        ids
    }

    /// The petgraph view.
    pub fn graph(&self) -> &WeightedDiGraph {
        &self.graph
    }
}

fn default_name(index: usize) -> String {
    format!("{}{}", defaults::DEFAULT_NODE_NAME_PREFIX, index + 1)
}
