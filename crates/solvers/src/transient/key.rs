use std::fmt;

use super::Scheme;

/// Identifies a run by its scheme and grid resolution.
///
/// Displays as `"<scheme>, n=<n>"`, which is also the trajectory label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunKey {
    pub scheme: Scheme,
    pub n: usize,
}

impl RunKey {
    #[must_use]
    pub fn new(scheme: Scheme, n: usize) -> Self {
        Self { scheme, n }
    }
}

impl fmt::Display for RunKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, n={}", self.scheme, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_scheme_and_resolution() {
        assert_eq!(RunKey::new(Scheme::Rk4, 20).to_string(), "RK4, n=20");
        assert_eq!(
            RunKey::new(Scheme::ImplicitEuler, 5).to_string(),
            "impl.E, n=5"
        );
    }

    #[test]
    fn orders_by_scheme_then_resolution() {
        let mut keys = vec![
            RunKey::new(Scheme::ImplicitEuler, 10),
            RunKey::new(Scheme::ExplicitEuler, 20),
            RunKey::new(Scheme::ExplicitEuler, 5),
        ];
        keys.sort();

        assert_eq!(
            keys,
            vec![
                RunKey::new(Scheme::ExplicitEuler, 5),
                RunKey::new(Scheme::ExplicitEuler, 20),
                RunKey::new(Scheme::ImplicitEuler, 10),
            ]
        );
    }
}
