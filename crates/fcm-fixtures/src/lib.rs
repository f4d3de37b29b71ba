//! Test fixture loader for golden stability scenarios.
//!
//! Provides typed deserialization of the JSON files under `test-fixtures/`
//! and helpers for loading them from any crate in the workspace.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

const FIXTURE_DIR: &str = "test-fixtures";

/// Nearest `test-fixtures` directory at or above this crate's manifest.
fn fixtures_root() -> PathBuf {
    let start = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    start
        .ancestors()
        .map(|dir| dir.join(FIXTURE_DIR))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| panic!("no {FIXTURE_DIR}/ above {}", start.display()))
}

/// Deserialize the JSON file at `relative_path` under the fixture root.
///
/// # Panics
/// On a missing file or a body that does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let body = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("bad fixture {}: {e}", path.display()))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).is_file()
}

/// JSON files directly inside `subdir`, in name order. Empty if `subdir` is absent.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixtures_root().join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A golden stabilization run.
#[derive(Debug, Clone, Deserialize)]
pub struct StabilityScenario {
    pub description: String,
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub names: BTreeMap<usize, String>,
    #[serde(default)]
    pub max_rounds: Option<usize>,
    pub expected: ExpectedOutcome,
}

/// Expected terminal result of a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOutcome {
    /// "stable" or "bounded_stop".
    pub state: String,
    /// Total analysis rounds, including the final one.
    pub rounds: usize,
    /// Removed cycle per mutation round.
    pub history: Vec<Vec<usize>>,
    /// Removed (source, target) pairs per mutation round.
    pub removed_edges: Vec<Vec<[usize; 2]>>,
    pub final_matrix: Vec<Vec<f64>>,
    pub first_round: ExpectedRound,
}

/// Expected cycle analysis of the first round.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedRound {
    pub cycle_count: usize,
    pub even_cycles: Vec<Vec<usize>>,
    pub recommended: Option<Vec<usize>>,
}

/// One spectral boundary case.
#[derive(Debug, Clone, Deserialize)]
pub struct SpectralCase {
    pub matrix: Vec<Vec<f64>>,
    pub spectral_radius: f64,
    pub perturbation_stable: bool,
    pub numerically_stable: bool,
}

/// Load every scenario under `golden/stability`, paired with its file stem.
pub fn stability_scenarios() -> Vec<(String, StabilityScenario)> {
    list_fixtures("golden/stability")
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = format!("golden/stability/{stem}.json");
            (stem, load_fixture(&relative))
        })
        .collect()
}

/// Load the spectral boundary cases.
pub fn spectral_cases() -> Vec<SpectralCase> {
    load_fixture("golden/spectral/boundary.json")
}
