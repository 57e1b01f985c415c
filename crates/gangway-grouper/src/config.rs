//! Deployment-time grouper configuration.
//!
//! Which quorum strategy a deployment runs is data, not code: the scheduler
//! loads a `[grouper]`-style section from its config file and constructs
//! exactly one strategy from it. There is no runtime branching between
//! strategies.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use gangway_object::ObjectClient;

use crate::annotation::AnnotationGrouper;
use crate::baseline::DefaultGrouper;
use crate::child_spec::ChildSpecGrouper;
use crate::strategy::GroupingStrategy;

/// Which MinAvailable inference strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuorumStrategy {
    /// Sum `replicas × parallelism` from the child orchestration resource.
    ChildSpecSum,
    /// Read the quorum a launching controller stamped onto the pod.
    Annotation,
}

/// Grouper section of the scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrouperConfig {
    pub strategy: QuorumStrategy,
    /// Queue assigned when neither pod nor owner carries a queue label.
    #[serde(default = "default_queue")]
    pub default_queue: String,
    /// Priority class assigned when neither pod nor owner carries one.
    #[serde(default = "default_priority_class")]
    pub default_priority_class: String,
}

fn default_queue() -> String {
    "default".to_string()
}

fn default_priority_class() -> String {
    "train".to_string()
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            strategy: QuorumStrategy::ChildSpecSum,
            default_queue: default_queue(),
            default_priority_class: default_priority_class(),
        }
    }
}

impl GrouperConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GrouperConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Construct the configured strategy.
///
/// The client is only read by the child-spec strategy, but wiring happens
/// once at startup so it is passed unconditionally.
pub fn build_strategy(
    config: &GrouperConfig,
    client: Arc<dyn ObjectClient>,
) -> Box<dyn GroupingStrategy> {
    let base = DefaultGrouper::new(&config.default_queue, &config.default_priority_class);
    match config.strategy {
        QuorumStrategy::ChildSpecSum => Box::new(ChildSpecGrouper::new(client, base)),
        QuorumStrategy::Annotation => Box::new(AnnotationGrouper::new(base)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangway_object::FakeClient;
    use std::io::Write;

    #[test]
    fn parses_minimal_config() {
        let config: GrouperConfig = toml::from_str("strategy = \"annotation\"").unwrap();
        assert_eq!(config.strategy, QuorumStrategy::Annotation);
        assert_eq!(config.default_queue, "default");
        assert_eq!(config.default_priority_class, "train");
    }

    #[test]
    fn parses_full_config() {
        let config: GrouperConfig = toml::from_str(
            r#"
            strategy = "child-spec-sum"
            default_queue = "gpu"
            default_priority_class = "research"
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, QuorumStrategy::ChildSpecSum);
        assert_eq!(config.default_queue, "gpu");
        assert_eq!(config.default_priority_class, "research");
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(toml::from_str::<GrouperConfig>("strategy = \"guess\"").is_err());
    }

    #[test]
    fn from_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"annotation\"\ndefault_queue = \"gpu\"").unwrap();

        let config = GrouperConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy, QuorumStrategy::Annotation);
        assert_eq!(config.default_queue, "gpu");
    }

    #[test]
    fn builds_the_selected_strategy() {
        let client = Arc::new(FakeClient::new());

        let child_spec = build_strategy(&GrouperConfig::default(), client.clone());
        assert_eq!(child_spec.name(), "child-spec-sum");

        let annotation = build_strategy(
            &GrouperConfig {
                strategy: QuorumStrategy::Annotation,
                ..GrouperConfig::default()
            },
            client,
        );
        assert_eq!(annotation.name(), "annotation");
    }
}
