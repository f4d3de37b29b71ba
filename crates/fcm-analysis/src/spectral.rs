//! Spectral stability of the adjacency matrix.
//!
//! Eigenvalues come from a real Schur decomposition (`nalgebra`), so complex
//! conjugate pairs of non-symmetric matrices are recovered. Francis iteration
//! stalls on cyclic permutation structure (every loop of unit weights), so a
//! stalled decomposition is retried on a Householder-reflected copy `H·A·H`,
//! which has the same spectrum.
//!
//! Radii within a small band around 1 are reported as exactly 1, so the two
//! predicates split on the boundary the way exact arithmetic would.

use nalgebra::linalg::Schur;
use nalgebra::{DMatrix, DVector};

use fcm_core::config::{defaults, SpectralConfig};
use fcm_core::errors::SpectralError;
use fcm_core::models::Eigenvalue;
use fcm_core::AdjacencyMatrix;

/// Irrational step sizes generating the retry reflectors, tried in order.
const REFLECTOR_STEPS: [f64; 3] = [
    0.618_033_988_749_895,
    0.414_213_562_373_095,
    0.732_050_807_568_877,
];

/// Eigenvalues, spectral radius, and both stability predicates for one matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralAssessment {
    pub eigenvalues: Vec<Eigenvalue>,
    /// Snapped to exactly 1 inside the boundary band.
    pub spectral_radius: f64,
    /// Bounded response to bounded perturbation: radius ≤ 1.
    pub perturbation_stable: bool,
    /// Free dynamics decay to zero: radius < 1.
    pub numerically_stable: bool,
}

/// Computes eigenvalue-based stability predicates.
#[derive(Debug, Clone)]
pub struct StabilityAnalyzer {
    max_iterations: usize,
    boundary_ulps: f64,
}

impl StabilityAnalyzer {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            boundary_ulps: defaults::DEFAULT_BOUNDARY_ULPS,
        }
    }

    pub fn from_config(config: &SpectralConfig) -> Self {
        Self::new(config.max_iterations).with_boundary_ulps(config.boundary_ulps)
    }

    /// Width of the unit-radius band. Zero disables snapping.
    pub fn with_boundary_ulps(mut self, ulps: f64) -> Self {
        self.boundary_ulps = ulps;
        self
    }

    /// Full complex eigenvalue spectrum.
    pub fn eigenvalues(&self, matrix: &AdjacencyMatrix) -> Result<Vec<Eigenvalue>, SpectralError> {
        let n = matrix.size();
        if n == 0 {
            return Ok(Vec::new());
        }
        if let Some((idx, &value)) = matrix
            .as_slice()
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(SpectralError::NonFinite {
                row: idx / n,
                col: idx % n,
                value,
            });
        }

        let m = DMatrix::from_row_slice(n, n, matrix.as_slice());
        if let Some(eigenvalues) = self.decompose(m.clone()) {
            return Ok(eigenvalues);
        }
        for (attempt, step) in REFLECTOR_STEPS.into_iter().enumerate() {
            let h = reflector(n, step);
            if let Some(eigenvalues) = self.decompose(&h * &m * &h) {
                tracing::debug!(
                    nodes = n,
                    attempt = attempt + 1,
                    "schur converged after reflection"
                );
                return Ok(eigenvalues);
            }
        }
        Err(SpectralError::NotConverged {
            max_iterations: self.max_iterations,
        })
    }

    /// max |λ| over the spectrum, snapped to 1 inside the boundary band;
    /// 0 for an empty matrix.
    pub fn spectral_radius(&self, matrix: &AdjacencyMatrix) -> Result<f64, SpectralError> {
        let eigenvalues = self.eigenvalues(matrix)?;
        Ok(self.snap(matrix, radius_of(&eigenvalues)))
    }

    /// Spectral radius ≤ 1.
    pub fn is_perturbation_stable(&self, matrix: &AdjacencyMatrix) -> Result<bool, SpectralError> {
        Ok(self.spectral_radius(matrix)? <= 1.0)
    }

    /// Spectral radius < 1.
    pub fn is_numerically_stable(&self, matrix: &AdjacencyMatrix) -> Result<bool, SpectralError> {
        Ok(self.spectral_radius(matrix)? < 1.0)
    }

    /// Single decomposition feeding every predicate.
    pub fn assess(&self, matrix: &AdjacencyMatrix) -> Result<SpectralAssessment, SpectralError> {
        let eigenvalues = self.eigenvalues(matrix)?;
        let spectral_radius = self.snap(matrix, radius_of(&eigenvalues));
        tracing::debug!(
            nodes = matrix.size(),
            spectral_radius = spectral_radius,
            "spectrum computed"
        );
        Ok(SpectralAssessment {
            eigenvalues,
            spectral_radius,
            perturbation_stable: spectral_radius <= 1.0,
            numerically_stable: spectral_radius < 1.0,
        })
    }

    /// Half-width of the unit-radius band: `ulps * n * EPSILON * max(‖A‖_F, 1)`.
    pub fn boundary_tolerance(&self, matrix: &AdjacencyMatrix) -> f64 {
        let frobenius = matrix.as_slice().iter().map(|w| w * w).sum::<f64>().sqrt();
        self.boundary_ulps * matrix.size() as f64 * f64::EPSILON * frobenius.max(1.0)
    }

    fn snap(&self, matrix: &AdjacencyMatrix, radius: f64) -> f64 {
        if (radius - 1.0).abs() <= self.boundary_tolerance(matrix) {
            1.0
        } else {
            radius
        }
    }

    fn decompose(&self, m: DMatrix<f64>) -> Option<Vec<Eigenvalue>> {
        let schur = Schur::try_new(m, f64::EPSILON, self.max_iterations)?;
        Some(
            schur
                .complex_eigenvalues()
                .iter()
                .map(|c| Eigenvalue::new(c.re, c.im))
                .collect(),
        )
    }
}

impl Default for StabilityAnalyzer {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_SCHUR_MAX_ITERATIONS)
    }
}

/// Householder reflector `I - 2vvᵀ` for a unit vector with pairwise distinct
/// entries. Symmetric and orthogonal, so `H·A·H` is similar to `A`.
fn reflector(n: usize, step: f64) -> DMatrix<f64> {
    let v = DVector::from_fn(n, |i, _| ((i as f64 + 1.0) * step).fract() + 0.5).normalize();
    DMatrix::identity(n, n) - (&v * v.transpose()) * 2.0
}

fn radius_of(eigenvalues: &[Eigenvalue]) -> f64 {
    eigenvalues
        .iter()
        .map(Eigenvalue::modulus)
        .fold(0.0, f64::max)
}
