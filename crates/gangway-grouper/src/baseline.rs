//! Baseline grouping — metadata derivable without extra cluster reads.

use async_trait::async_trait;

use gangway_object::{Pod, Unstructured, keys};

use crate::error::{GrouperError, GrouperResult};
use crate::metadata::{OwnerReference, PodGroupMetadata};
use crate::strategy::GroupingStrategy;

/// Builds pod-group metadata from state visible directly on the pod and its
/// top owner: identity, owner reference, queue, and priority class.
///
/// Baseline `min_available` is 1 (a single schedulable pod); the quorum
/// strategies wrap this grouper and override it.
#[derive(Debug, Clone)]
pub struct DefaultGrouper {
    default_queue: String,
    default_priority_class: String,
}

impl DefaultGrouper {
    pub fn new(default_queue: &str, default_priority_class: &str) -> Self {
        Self {
            default_queue: default_queue.to_string(),
            default_priority_class: default_priority_class.to_string(),
        }
    }

    /// Pod label wins over the owner's; configured default last.
    fn queue(&self, top_owner: &Unstructured, pod: &Pod) -> String {
        pod.label(keys::QUEUE_LABEL)
            .or_else(|| top_owner.label(keys::QUEUE_LABEL))
            .unwrap_or(&self.default_queue)
            .to_string()
    }

    fn priority_class(&self, top_owner: &Unstructured, pod: &Pod) -> String {
        pod.label(keys::PRIORITY_CLASS_LABEL)
            .or_else(|| top_owner.label(keys::PRIORITY_CLASS_LABEL))
            .unwrap_or(&self.default_priority_class)
            .to_string()
    }
}

#[async_trait]
impl GroupingStrategy for DefaultGrouper {
    fn name(&self) -> &'static str {
        "default"
    }

    async fn pod_group_metadata(
        &self,
        top_owner: &Unstructured,
        pod: &Pod,
    ) -> GrouperResult<PodGroupMetadata> {
        if top_owner.name.is_empty() {
            return Err(GrouperError::UnnamedOwner);
        }

        Ok(PodGroupMetadata {
            namespace: top_owner.namespace.clone(),
            name: format!("pg-{}", top_owner.name),
            owner: OwnerReference {
                gvk: top_owner.gvk.clone(),
                name: top_owner.name.clone(),
            },
            queue: self.queue(top_owner, pod),
            priority_class: self.priority_class(top_owner, pod),
            min_available: 1,
        })
    }
}
