//! Simple-cycle enumeration and sign-parity classification.
//!
//! Enumeration is Johnson's algorithm run once per start node, restricted to
//! nodes with index ≥ start inside the start's strongly connected component.
//! Output order is fixed:
//!   1. cycles are grouped by their smallest node, ascending;
//!   2. within a group, depth-first with successors in ascending index order.
//! Every cycle begins at its smallest node. Removal recommendations depend on
//! this order.

use std::collections::BTreeSet;

use fcm_core::errors::GraphError;
use fcm_core::models::{Cycle, Parity};

use crate::graph::GraphModel;

/// All cycles of a graph together with the even subset.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleAnalysis {
    /// Every simple cycle in enumeration order.
    pub cycles: Vec<Cycle>,
    /// Even cycles in enumeration order.
    pub even_cycles: Vec<Cycle>,
}

impl CycleAnalysis {
    /// Structurally stable iff there is no even cycle.
    pub fn is_structurally_stable(&self) -> bool {
        self.even_cycles.is_empty()
    }

    pub fn recommended(&self) -> Option<Cycle> {
        CycleClassifier::recommend_removal(&self.even_cycles)
    }
}

/// Enumerates and classifies signed cycles.
pub struct CycleClassifier;

impl CycleClassifier {
    /// Every simple cycle, self-loops included, in the documented order.
    pub fn enumerate_simple_cycles(graph: &GraphModel) -> Vec<Cycle> {
        let n = graph.node_count();
        let component = graph.component_ids();
        let mut search = CircuitSearch::new(n);
        let mut cycles = Vec::new();

        for start in 0..n {
            let allowed: Vec<bool> = (0..n)
                .map(|v| v >= start && component[v] == component[start])
                .collect();
            search.reset();
            search.circuit(graph, &allowed, start, start, &mut cycles);
        }
        cycles
    }

    /// Parity of the cycle's negative edge count, wrap-around edge included.
    pub fn classify(cycle: &Cycle, graph: &GraphModel) -> Result<Parity, GraphError> {
        let mut negatives = 0;
        for edge in cycle.edges() {
            if graph.weight(edge.source, edge.target)? < 0.0 {
                negatives += 1;
            }
        }
        Ok(Parity::from_negative_count(negatives))
    }

    /// Even cycles in enumeration order. Empty means structurally stable.
    pub fn structural_stability(graph: &GraphModel) -> Result<Vec<Cycle>, GraphError> {
        Ok(Self::analyze(graph)?.even_cycles)
    }

    /// Enumerate once and split out the even cycles.
    pub fn analyze(graph: &GraphModel) -> Result<CycleAnalysis, GraphError> {
        let cycles = Self::enumerate_simple_cycles(graph);
        let mut even_cycles = Vec::new();
        for cycle in &cycles {
            if Self::classify(cycle, graph)?.is_even() {
                even_cycles.push(cycle.clone());
            }
        }
        tracing::debug!(
            cycles = cycles.len(),
            even = even_cycles.len(),
            "cycles classified"
        );
        Ok(CycleAnalysis {
            cycles,
            even_cycles,
        })
    }

    /// The last even cycle in enumeration order, if any.
    pub fn recommend_removal(even_cycles: &[Cycle]) -> Option<Cycle> {
        even_cycles.last().cloned()
    }
}

/// Johnson's blocked-set state, reused across start nodes.
struct CircuitSearch {
    blocked: Vec<bool>,
    blocked_by: Vec<BTreeSet<usize>>,
    stack: Vec<usize>,
}

impl CircuitSearch {
    fn new(n: usize) -> Self {
        Self {
            blocked: vec![false; n],
            blocked_by: vec![BTreeSet::new(); n],
            stack: Vec::with_capacity(n),
        }
    }

    fn reset(&mut self) {
        self.blocked.iter_mut().for_each(|b| *b = false);
        self.blocked_by.iter_mut().for_each(BTreeSet::clear);
        self.stack.clear();
    }

    fn circuit(
        &mut self,
        graph: &GraphModel,
        allowed: &[bool],
        v: usize,
        start: usize,
        out: &mut Vec<Cycle>,
    ) -> bool {
        let mut found = false;
        self.stack.push(v);
        self.blocked[v] = true;

        for &w in graph.successors(v) {
            if !allowed[w] {
                continue;
            }
            if w == start {
                out.push(Cycle::new(self.stack.clone()));
                found = true;
            } else if !self.blocked[w] && self.circuit(graph, allowed, w, start, out) {
                found = true;
            }
        }

        if found {
            self.unblock(v);
        } else {
            for &w in graph.successors(v) {
                if allowed[w] {
                    self.blocked_by[w].insert(v);
                }
            }
        }

        self.stack.pop();
        found
    }

    fn unblock(&mut self, u: usize) {
        self.blocked[u] = false;
        let waiting = std::mem::take(&mut self.blocked_by[u]);
        for w in waiting {
            if self.blocked[w] {
                self.unblock(w);
            }
        }
    }
}
