//! Read access to cluster objects.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{ObjectError, ObjectResult};
use crate::unstructured::{GroupVersionKind, Unstructured};

/// Read-only access to cluster objects.
///
/// One read per call, no retries, no caching. Implementations must be safe
/// for concurrent use; callers own timeout and cancellation of the read.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    /// Fetch a single object by schema selector and identity.
    async fn get(
        &self,
        gvk: &GroupVersionKind,
        namespace: &str,
        name: &str,
    ) -> ObjectResult<Unstructured>;
}

/// In-memory client for tests and single-process wiring.
///
/// Shared-reference insertion lets tests update "cluster state" after the
/// client is wired into a strategy; reads clone the stored object so
/// callers never observe later mutation through a fetched copy.
#[derive(Debug, Default)]
pub struct FakeClient {
    objects: RwLock<HashMap<(GroupVersionKind, String, String), Unstructured>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object, replacing any previous version.
    pub fn insert(&self, object: Unstructured) {
        self.objects
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(
                (
                    object.gvk.clone(),
                    object.namespace.clone(),
                    object.name.clone(),
                ),
                object,
            );
    }
}

#[async_trait]
impl ObjectClient for FakeClient {
    async fn get(
        &self,
        gvk: &GroupVersionKind,
        namespace: &str,
        name: &str,
    ) -> ObjectResult<Unstructured> {
        self.objects
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&(gvk.clone(), namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| ObjectError::NotFound {
                kind: gvk.kind.clone(),
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}
