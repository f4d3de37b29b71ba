//! Which edges a recommended cycle loses.

use fcm_core::models::{Cycle, EdgeRef};

/// Edges zeroed when `cycle` is removed.
///
/// For (c0..ck-1) with k ≥ 2 these are the k−1 consecutive pairs
/// (c0,c1)..(ck-2,ck-1); the closing edge (ck-1,c0) is kept. A self-loop loses
/// its only edge.
pub fn removal_edges(cycle: &Cycle) -> Vec<EdgeRef> {
    match cycle.nodes() {
        [] => Vec::new(),
        [only] => vec![EdgeRef::new(*only, *only)],
        nodes => nodes
            .windows(2)
            .map(|pair| EdgeRef::new(pair[0], pair[1]))
            .collect(),
    }
}
