//! gangway-grouper — gang quorum (MinAvailable) inference.
//!
//! Before a distributed training job is admitted, the scheduler must know
//! how many of its member pods have to be simultaneously schedulable.
//! Admitting early deadlocks the collective; this crate derives that quorum
//! from the job-launching framework's own topology.
//!
//! # Components
//!
//! - **[`DefaultGrouper`]** — baseline metadata from directly visible state
//! - **[`ChildSpecGrouper`]** — quorum summed from the child orchestration
//!   resource (`spec.replicatedJobs`: replicas × parallelism)
//! - **[`AnnotationGrouper`]** — quorum read back from an annotation a
//!   launching controller stamped onto the pod
//! - **[`config`]** — deployment-time selection of exactly one strategy
//!
//! The two quorum strategies are alternatives behind one
//! [`GroupingStrategy`] trait, not a runtime fallback chain: each
//! job-launching integration runs the one that matches how its launcher
//! publishes topology.

pub mod annotation;
pub mod baseline;
pub mod child_spec;
pub mod config;
pub mod error;
pub mod metadata;
pub mod strategy;

pub use annotation::AnnotationGrouper;
pub use baseline::DefaultGrouper;
pub use child_spec::ChildSpecGrouper;
pub use config::{GrouperConfig, QuorumStrategy, build_strategy};
pub use error::{GrouperError, GrouperResult};
pub use metadata::{OwnerReference, PodGroupMetadata};
pub use strategy::GroupingStrategy;
