use serde::{Deserialize, Serialize};

/// A complex eigenvalue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eigenvalue {
    pub re: f64,
    pub im: f64,
}

impl Eigenvalue {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Absolute value |λ|.
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }
}
