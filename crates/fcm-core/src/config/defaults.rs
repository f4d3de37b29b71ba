// Single source of truth for all default values.

// --- Graph ---
pub const DEFAULT_NODE_NAME_PREFIX: &str = "V";

// --- Simulation ---
pub const DEFAULT_SIMULATION_STEPS: i64 = 5;
/// Node that receives the unit impulse when none is supplied (the second node).
pub const DEFAULT_IMPULSE_NODE: usize = 1;

// --- Stabilization ---
pub const DEFAULT_MAX_ROUNDS: Option<usize> = None;

// --- Spectral ---
pub const DEFAULT_SCHUR_MAX_ITERATIONS: usize = 10_000;
/// Radii within `ulps * n * EPSILON * max(‖A‖_F, 1)` of 1 are reported as exactly 1.
pub const DEFAULT_BOUNDARY_ULPS: f64 = 1024.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
