use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input outside the physical or mathematical domain of a formula.
    #[error("domain error: {0}")]
    Domain(String),

    /// A root bracket without a sign change.
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("{context}: did not converge after {iterations} iterations (tolerance {tolerance:.2e})")]
    Convergence {
        context: String,
        iterations: usize,
        tolerance: f64
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn domain<S: Into<String>>(msg: S) -> Error {
        Error::Domain(msg.into())
    }

    pub fn precondition<S: Into<String>>(msg: S) -> Error {
        Error::Precondition(msg.into())
    }

    pub fn convergence<S: Into<String>>(context: S, iterations: usize, tolerance: f64) -> Error {
        Error::Convergence { context: context.into(), iterations, tolerance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::convergence("brentq", 100, 2e-12);
        assert_eq!(e.to_string(), "brentq: did not converge after 100 iterations (tolerance 2.00e-12)");
        assert!(Error::domain("negative redshift").to_string().contains("negative redshift"));
        assert!(Error::precondition("no sign change").to_string().starts_with("precondition"));
    }
}
