//! Quorum readback from a stamped pod annotation.
//!
//! Launchers that already know their gang size stamp it onto each pod,
//! saving the second cluster read the child-spec strategy pays. The
//! annotation is advisory: anything absent, unparsable, or non-positive
//! reads as "no override" and the baseline quorum stands.

use async_trait::async_trait;
use tracing::{debug, warn};

use gangway_object::{Pod, Unstructured, keys};

use crate::baseline::DefaultGrouper;
use crate::error::GrouperResult;
use crate::metadata::PodGroupMetadata;
use crate::strategy::GroupingStrategy;

/// Quorum strategy for launchers that stamp MinAvailable onto their pods.
pub struct AnnotationGrouper {
    base: DefaultGrouper,
}

impl AnnotationGrouper {
    pub fn new(base: DefaultGrouper) -> Self {
        Self { base }
    }
}

#[async_trait]
impl GroupingStrategy for AnnotationGrouper {
    fn name(&self) -> &'static str {
        "annotation"
    }

    async fn pod_group_metadata(
        &self,
        top_owner: &Unstructured,
        pod: &Pod,
    ) -> GrouperResult<PodGroupMetadata> {
        let mut metadata = self.base.pod_group_metadata(top_owner, pod).await?;

        if let Some(min_available) = stamped_min_available(pod) {
            debug!(
                namespace = %pod.namespace,
                pod = %pod.name,
                min_available,
                "gang quorum from stamped annotation"
            );
            metadata.min_available = min_available;
        }

        Ok(metadata)
    }
}

/// Parse the stamped quorum, yielding `None` for anything that is not a
/// strictly positive base-10 integer.
fn stamped_min_available(pod: &Pod) -> Option<i32> {
    let raw = pod.annotation(keys::MIN_AVAILABLE_ANNOTATION)?;
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i32>() {
        Ok(value) if value > 0 => Some(value),
        Ok(value) => {
            warn!(pod = %pod.name, value, "ignoring non-positive min-available annotation");
            None
        }
        Err(_) => {
            warn!(pod = %pod.name, value = raw, "ignoring unparsable min-available annotation");
            None
        }
    }
}
