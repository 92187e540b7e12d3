//! Error types for mxfkit.

use crate::ul::Ul;
use thiserror::Error;

/// Result type alias using mxfkit's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mxfkit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Two different tags were registered for the same Universal Label.
    ///
    /// Only reachable while building a registry; the compiled-in tables are
    /// conflict-free, so this indicates an incorrect table edit.
    #[error("duplicate registration for {ul}: already {existing}, rejected {incoming}")]
    DuplicateRegistration {
        /// The label that was registered twice.
        ul: Ul,
        /// Tag already present in the registry.
        existing: String,
        /// Tag whose registration was rejected.
        incoming: String,
    },
}
