//! Quorum from the child orchestration resource.
//!
//! Some launchers never write their replica/parallelism topology on the
//! top-level job or its pods; the authoritative numbers live in a child
//! resource the job controller creates under the same namespace and name.
//! This strategy fetches that resource and sums `replicas × parallelism`
//! across its `spec.replicatedJobs` entries.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use gangway_object::{ObjectClient, Pod, Unstructured, keys};

use crate::baseline::DefaultGrouper;
use crate::error::{GrouperError, GrouperResult};
use crate::metadata::PodGroupMetadata;
use crate::strategy::GroupingStrategy;

/// One `spec.replicatedJobs` entry, reduced to the fields that drive quorum.
/// Absent fields default to 1; present fields of the wrong type are a hard
/// decode error, not a default.
#[derive(Debug, Deserialize)]
struct ReplicatedJob {
    replicas: Option<i64>,
    template: Option<JobTemplate>,
}

#[derive(Debug, Deserialize)]
struct JobTemplate {
    spec: Option<JobTemplateSpec>,
}

#[derive(Debug, Deserialize)]
struct JobTemplateSpec {
    parallelism: Option<i64>,
}

impl ReplicatedJob {
    fn pod_count(&self) -> i64 {
        let replicas = self.replicas.unwrap_or(1);
        let parallelism = self
            .template
            .as_ref()
            .and_then(|t| t.spec.as_ref())
            .and_then(|s| s.parallelism)
            .unwrap_or(1);
        replicas.saturating_mul(parallelism)
    }
}

/// Quorum strategy for launchers whose topology lives in a child resource.
///
/// Wraps the baseline grouper; one cluster read per resolution, no caching.
pub struct ChildSpecGrouper {
    client: Arc<dyn ObjectClient>,
    base: DefaultGrouper,
}

impl ChildSpecGrouper {
    pub fn new(client: Arc<dyn ObjectClient>, base: DefaultGrouper) -> Self {
        Self { client, base }
    }

    /// Sum of `replicas × parallelism` across the child resource.
    ///
    /// Fails whole: a missing `spec.replicatedJobs` or a single malformed
    /// entry aborts the computation, never a partial sum.
    async fn min_available_from_child(&self, namespace: &str, name: &str) -> GrouperResult<i32> {
        let child = self
            .client
            .get(&keys::child_job_gvk(), namespace, name)
            .await?;
        let object = format!("{} {namespace}/{name}", child.gvk.kind);

        let Some(replicated_jobs) = child.nested(&["spec", "replicatedJobs"]) else {
            return Err(GrouperError::MissingReplicatedJobs { object });
        };
        let Some(replicated_jobs) = replicated_jobs.as_array() else {
            return Err(GrouperError::ReplicatedJobsNotAList { object });
        };

        let mut total: i64 = 0;
        for (index, entry) in replicated_jobs.iter().enumerate() {
            let job: ReplicatedJob = serde_json::from_value(entry.clone()).map_err(|e| {
                GrouperError::MalformedReplicatedJob {
                    object: object.clone(),
                    index,
                    reason: e.to_string(),
                }
            })?;
            total = total.saturating_add(job.pod_count());
        }

        Ok(i32::try_from(total).unwrap_or(i32::MAX))
    }
}

#[async_trait]
impl GroupingStrategy for ChildSpecGrouper {
    fn name(&self) -> &'static str {
        "child-spec-sum"
    }

    async fn pod_group_metadata(
        &self,
        top_owner: &Unstructured,
        pod: &Pod,
    ) -> GrouperResult<PodGroupMetadata> {
        let mut metadata = self.base.pod_group_metadata(top_owner, pod).await?;

        let min_available = self
            .min_available_from_child(&top_owner.namespace, &top_owner.name)
            .await?;
        if min_available > 0 {
            debug!(
                namespace = %top_owner.namespace,
                owner = %top_owner.name,
                min_available,
                "gang quorum from child resource"
            );
            metadata.min_available = min_available;
        }

        Ok(metadata)
    }
}
