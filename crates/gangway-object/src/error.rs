//! Object-access error types.

use thiserror::Error;

/// Errors from reading cluster objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: String,
        namespace: String,
        name: String,
    },

    #[error("failed to get {kind} {namespace}/{name}: {source}")]
    Client {
        kind: String,
        namespace: String,
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type ObjectResult<T> = Result<T, ObjectError>;
