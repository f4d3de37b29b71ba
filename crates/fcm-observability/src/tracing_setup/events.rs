//! Structured log events for controller milestones.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the completion of an analysis round.
pub fn round_completed(round: usize, spectral_radius: f64, even_cycles: usize) {
    tracing::info!(
        event = "round_completed",
        round = round,
        spectral_radius = spectral_radius,
        even_cycles = even_cycles,
        "analysis round completed"
    );
}

/// Log the edges removed to break a cycle.
pub fn edges_removed(round: usize, cycle: &str, removed: usize) {
    tracing::info!(
        event = "edges_removed",
        round = round,
        cycle = %cycle,
        removed = removed,
        "cycle edges removed"
    );
}

/// Log the terminal state of a run.
pub fn run_finished(state: &str, rounds: usize, removed_edges: usize) {
    tracing::info!(
        event = "run_finished",
        state = %state,
        rounds = rounds,
        removed_edges = removed_edges,
        "stabilization finished"
    );
}

/// Log a run stopped by the round cap.
pub fn round_cap_reached(max_rounds: usize, remaining_even_cycles: usize) {
    tracing::warn!(
        event = "round_cap_reached",
        max_rounds = max_rounds,
        remaining_even_cycles = remaining_even_cycles,
        "round cap reached before structural stability"
    );
}
