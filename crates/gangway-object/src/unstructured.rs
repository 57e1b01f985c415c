//! Weakly-typed cluster resources.
//!
//! An [`Unstructured`] is a resource whose schema is only identified at
//! runtime: a group/version/kind selector plus an arbitrary nested JSON
//! body. Path accessors distinguish "absent" (`None`) from "present"; typed
//! decoding of subtrees happens at the point of use so each consumer applies
//! its own absent-field defaults.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies the schema of a cluster resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// A cluster resource with a runtime-identified schema.
///
/// Identified by `(namespace, name)` within its kind. The body is the raw
/// document as served by the cluster, read-only to this workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unstructured {
    pub gvk: GroupVersionKind,
    pub namespace: String,
    pub name: String,
    pub body: Value,
}

impl Unstructured {
    pub fn new(gvk: GroupVersionKind, namespace: &str, name: &str, body: Value) -> Self {
        Self {
            gvk,
            namespace: namespace.to_string(),
            name: name.to_string(),
            body,
        }
    }

    /// Walk a path of object keys into the body.
    ///
    /// Returns `None` if any segment is absent or its parent is not an
    /// object, which is how "absent" and "wrong shape above this field"
    /// collapse for optional reads. Callers that must tell the two apart
    /// decode the subtree instead.
    pub fn nested(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.body;
        for segment in path {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Read a label from `metadata.labels`.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.nested(&["metadata", "labels"])?.get(key)?.as_str()
    }

    /// Read an annotation from `metadata.annotations`.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.nested(&["metadata", "annotations"])?.get(key)?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jobset(body: Value) -> Unstructured {
        Unstructured::new(
            GroupVersionKind::new("jobset.x-k8s.io", "v1alpha2", "JobSet"),
            "team-a",
            "train",
            body,
        )
    }

    #[test]
    fn nested_walks_object_path() {
        let obj = jobset(json!({"spec": {"replicatedJobs": [{"replicas": 2}]}}));
        let jobs = obj.nested(&["spec", "replicatedJobs"]).unwrap();
        assert!(jobs.is_array());
    }

    #[test]
    fn nested_absent_segment_is_none() {
        let obj = jobset(json!({"spec": {}}));
        assert!(obj.nested(&["spec", "replicatedJobs"]).is_none());
    }

    #[test]
    fn nested_through_non_object_is_none() {
        let obj = jobset(json!({"spec": "not-a-map"}));
        assert!(obj.nested(&["spec", "replicatedJobs"]).is_none());
    }

    #[test]
    fn label_reads_metadata() {
        let obj = jobset(json!({"metadata": {"labels": {"queue": "gpu"}}}));
        assert_eq!(obj.label("queue"), Some("gpu"));
        assert_eq!(obj.label("missing"), None);
    }

    #[test]
    fn label_missing_metadata_is_none() {
        let obj = jobset(json!({}));
        assert_eq!(obj.label("queue"), None);
        assert_eq!(obj.annotation("queue"), None);
    }

    #[test]
    fn non_string_label_value_is_none() {
        let obj = jobset(json!({"metadata": {"labels": {"queue": 3}}}));
        assert_eq!(obj.label("queue"), None);
    }

    #[test]
    fn gvk_display() {
        let gvk = GroupVersionKind::new("jobset.x-k8s.io", "v1alpha2", "JobSet");
        assert_eq!(gvk.to_string(), "jobset.x-k8s.io/v1alpha2, Kind=JobSet");
    }
}
