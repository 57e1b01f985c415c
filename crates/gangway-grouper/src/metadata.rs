//! Pod-group metadata handed to the admission stage.

use serde::{Deserialize, Serialize};

use gangway_object::GroupVersionKind;

/// Reference back to the top-level job resource a gang belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerReference {
    pub gvk: GroupVersionKind,
    pub name: String,
}

/// Scheduling metadata for one gang.
///
/// Built fresh by the baseline grouper on every resolution; quorum
/// strategies override `min_available` in place when they compute a better
/// value. Not persisted by this workspace — the scheduler runtime owns its
/// lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodGroupMetadata {
    pub namespace: String,
    pub name: String,
    pub owner: OwnerReference,
    pub queue: String,
    pub priority_class: String,
    /// Minimum number of gang pods that must be simultaneously schedulable
    /// for the job to be admitted. Always positive.
    pub min_available: i32,
}
