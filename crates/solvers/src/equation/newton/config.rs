use thiserror::Error;

/// Tolerances for the Newton solver.
///
/// `eps` is the residual threshold: the solver stops once `|g(y)| < eps`.
/// `iter_max` caps the number of updates per solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    iter_max: usize,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and positive")]
    Eps,

    #[error("iter_max must be at least 1")]
    IterMax,
}

impl Config {
    /// Default residual tolerance.
    pub const DEFAULT_EPS: f64 = 1e-10;

    /// Default iteration cap.
    pub const DEFAULT_ITER_MAX: usize = 50;

    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive, or if
    /// `iter_max` is zero.
    pub fn new(eps: f64, iter_max: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps);
        }
        if iter_max == 0 {
            return Err(ConfigError::IterMax);
        }

        Ok(Self { eps, iter_max })
    }

    /// Returns the residual tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn iter_max(&self) -> usize {
        self.iter_max
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: Self::DEFAULT_EPS,
            iter_max: Self::DEFAULT_ITER_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(Config::new(config.eps(), config.iter_max()), Ok(config));
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Eps));
        assert_eq!(Config::new(-1e-6, 10), Err(ConfigError::Eps));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Eps));
        assert_eq!(Config::new(1e-6, 0), Err(ConfigError::IterMax));
    }
}
