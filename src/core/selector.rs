use rand::Rng;
use rand_distr::{Beta, Distribution};

use super::errors::{GenerationError, Result};
use crate::models::IdentifierPool;

pub const DEFAULT_ALPHA: f64 = 2.0;
pub const DEFAULT_BETA: f64 = 2.0;

/// Picks pool entries with a Beta(a, b) bias over their position.
///
/// With a = b the weight is symmetric around the middle of the pool; a = b = 1
/// degenerates to a uniform pick.
#[derive(Debug, Clone)]
pub struct WeightedSelector {
    alpha: f64,
    beta: f64,
    distribution: Beta<f64>,
}

impl WeightedSelector {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(alpha) || !valid(beta) {
            return Err(GenerationError::InvalidShape { a: alpha, b: beta });
        }
        let distribution =
            Beta::new(alpha, beta).map_err(|_| GenerationError::InvalidShape { a: alpha, b: beta })?;

        Ok(Self {
            alpha,
            beta,
            distribution,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Index into a pool of `len` entries; `len` must be non-zero.
    pub fn sample_index<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> usize {
        let draw: f64 = self.distribution.sample(rng);
        // A draw of exactly 1.0 would land one past the end.
        ((draw * len as f64) as usize).min(len.saturating_sub(1))
    }

    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a IdentifierPool,
        rng: &mut R,
    ) -> Result<&'a str> {
        if pool.is_empty() {
            return Err(GenerationError::EmptyPool);
        }
        let index = self.sample_index(pool.len(), rng);
        pool.get(index).ok_or(GenerationError::EmptyPool)
    }
}
