//! Pod — the schedulable unit, reduced to what the decision logic reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A cluster pod: identity plus the label/annotation maps that carry role
/// and quorum hints from the launching controller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pod {
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Pod {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Builder-style label insertion, used heavily by tests.
    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    /// Builder-style annotation insertion, used heavily by tests.
    pub fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.annotations.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_none_when_absent() {
        let pod = Pod::new("team-a", "train-0");
        assert_eq!(pod.label("role"), None);
        assert_eq!(pod.annotation("index"), None);
    }

    #[test]
    fn builder_sets_maps() {
        let pod = Pod::new("team-a", "train-0")
            .with_label("role", "master")
            .with_annotation("index", "0");
        assert_eq!(pod.label("role"), Some("master"));
        assert_eq!(pod.annotation("index"), Some("0"));
    }

    #[test]
    fn deserializes_without_maps() {
        let pod: Pod = serde_json::from_str(r#"{"namespace": "team-a", "name": "train-0"}"#).unwrap();
        assert!(pod.labels.is_empty());
        assert!(pod.annotations.is_empty());
    }
}
