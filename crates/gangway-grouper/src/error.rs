//! Grouper error types.

use thiserror::Error;

use gangway_object::ObjectError;

/// Errors that can occur while resolving pod-group metadata.
///
/// Optional fields never error: absent `replicas`/`parallelism` default to 1
/// and invalid stamped annotations read as "no override". Errors are
/// reserved for structure with no sensible default; a failed resolution
/// returns no partial result.
#[derive(Debug, Error)]
pub enum GrouperError {
    /// The top owner cannot identify a pod group.
    #[error("top owner has no name, cannot derive pod group")]
    UnnamedOwner,

    /// Reading the child job resource failed.
    #[error(transparent)]
    Object(#[from] ObjectError),

    /// The child resource is not shaped like a replicated-jobs orchestrator.
    #[error("spec.replicatedJobs not found in {object}")]
    MissingReplicatedJobs { object: String },

    /// `spec.replicatedJobs` exists but is not a list.
    #[error("spec.replicatedJobs in {object} is not a list")]
    ReplicatedJobsNotAList { object: String },

    /// One list entry does not decode to the expected shape.
    #[error("invalid structure of spec.replicatedJobs[{index}] in {object}: {reason}")]
    MalformedReplicatedJob {
        object: String,
        index: usize,
        reason: String,
    },
}

pub type GrouperResult<T> = Result<T, GrouperError>;
