//! Unified error type for the migration engine.

use thiserror::Error;

/// Errors surfaced by the catalog migration engine.
///
/// Store failures propagate and abort the current run; there is no retry
/// layer. Benign DDL failures never reach this type; they are reported as
/// [`crate::migrate::ddl::StatementOutcome`] values instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A failure reported by the store.
    #[error("database error: {0}")]
    Db(#[from] diesel::result::Error),

    /// Uniqueness violation while materializing a color entity.
    #[error("duplicate color entity: {name}")]
    DuplicateColor {
        /// The color name that collided.
        name: String,
    },

    /// A price delta below -100% (or a non-finite one) would produce
    /// negative prices.
    #[error("invalid price delta percent: {0}")]
    InvalidDelta(f64),

    /// The seed profile failed parsing or validation.
    #[error("invalid seed profile: {0}")]
    Profile(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
