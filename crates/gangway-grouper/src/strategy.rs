//! The grouping strategy seam.

use async_trait::async_trait;

use gangway_object::{Pod, Unstructured};

use crate::error::GrouperResult;
use crate::metadata::PodGroupMetadata;

/// A MinAvailable inference strategy.
///
/// Exactly one implementation is constructed per job-launching integration
/// (see [`crate::config`]); strategies never fall back to one another at
/// runtime. Implementations hold no mutable state and are safe to call
/// concurrently from scheduler tasks.
#[async_trait]
pub trait GroupingStrategy: Send + Sync {
    /// Strategy name for logs.
    fn name(&self) -> &'static str;

    /// Resolve scheduling metadata for the gang `pod` belongs to.
    ///
    /// Reads current cluster state on every call, so successive results for
    /// the same job may differ if the job resource changed in between.
    /// Errors mean the resolution produced nothing usable; the caller
    /// decides whether that blocks admission.
    async fn pod_group_metadata(
        &self,
        top_owner: &Unstructured,
        pod: &Pod,
    ) -> GrouperResult<PodGroupMetadata>;
}
