//! Well-known keys consumed by the scheduling decisions.
//!
//! Role and completion-index keys follow the conventions of the launching
//! frameworks that stamp them; the `gangway.io/*` keys are this scheduler's
//! own contract with integrations.

use crate::unstructured::GroupVersionKind;

/// Role label stamped by training launchers on each member pod.
pub const JOB_ROLE_LABEL: &str = "training.kubeflow.org/job-role";

/// Role values that must be preempted only after all other gang members.
pub const PROTECTED_ROLES: [&str; 2] = ["master", "launcher"];

/// Completion index assigned by the indexed-job controller. Index 0 names
/// the coordinator of frameworks that use indexed collective jobs instead
/// of role labels.
pub const JOB_COMPLETION_INDEX_ANNOTATION: &str = "batch.kubernetes.io/job-completion-index";

/// Pre-computed gang quorum stamped onto pods by launching controllers that
/// know their own topology.
pub const MIN_AVAILABLE_ANNOTATION: &str = "gangway.io/min-available";

/// Queue assignment, read from the pod first and its top owner second.
pub const QUEUE_LABEL: &str = "gangway.io/queue";

/// Priority class, read from the pod first and its top owner second.
pub const PRIORITY_CLASS_LABEL: &str = "gangway.io/priority-class";

/// Child orchestration resource holding the authoritative
/// replica/parallelism topology for launcher-managed jobs.
pub fn child_job_gvk() -> GroupVersionKind {
    GroupVersionKind::new("jobset.x-k8s.io", "v1alpha2", "JobSet")
}
