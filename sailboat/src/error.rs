use thiserror::Error;

/// Rejected boat parameters. Raised once, at construction; stepping never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be strictly positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}
