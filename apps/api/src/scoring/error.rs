use thiserror::Error;

/// Deployment misconfiguration detected while building the scoring engine.
/// Never caused by user data; surfaces at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("keyword taxonomy is empty")]
    EmptyTaxonomy,

    #[error("section list is empty")]
    EmptySections,

    #[error("keyword '{0}' is declared more than once in the taxonomy")]
    DuplicateKeyword(String),

    #[error("keyword '{keyword}' cannot be compiled into a pattern: {reason}")]
    InvalidKeyword { keyword: String, reason: String },

    #[error("invalid word range: min ({min}) is greater than max ({max})")]
    InvalidWordRange { min: usize, max: usize },
}
