//! Declared application configuration and launch properties.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Identifier of a topic, namespaced by group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicKey {
    pub group: String,
    pub name: String,
}

impl TopicKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// The broker-side topic name: `{group}-{name}`.
    pub fn topic_name(&self) -> String {
        format!("{}-{}", self.group, self.name)
    }
}

/// Configuration an application declares through its config accessor.
///
/// Built once per launch, right after construction, and read-only afterward.
/// All fields are optional or may be empty; the launch host passes them
/// through without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Application identifier.
    pub name: Option<String>,
    /// Broker connection string, e.g. `broker0:9092,broker1:9092`.
    pub broker_connection: Option<String>,
    /// Topics the application consumes from, in declaration order.
    pub from_topics: Vec<TopicKey>,
    /// Topics the application produces to, in declaration order.
    pub to_topics: Vec<TopicKey>,
}

impl StreamConfig {
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::default()
    }
}

/// Renders as compact JSON; this is the `<config>` half of the
/// describe-and-exit output line.
impl fmt::Display for StreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[derive(Debug, Default)]
pub struct StreamConfigBuilder {
    name: Option<String>,
    broker_connection: Option<String>,
    from_topics: Vec<TopicKey>,
    to_topics: Vec<TopicKey>,
}

impl StreamConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn broker_connection(mut self, broker: impl Into<String>) -> Self {
        self.broker_connection = Some(broker.into());
        self
    }

    pub fn from_topic(mut self, key: TopicKey) -> Self {
        self.from_topics.push(key);
        self
    }

    pub fn to_topic(mut self, key: TopicKey) -> Self {
        self.to_topics.push(key);
        self
    }

    pub fn build(self) -> StreamConfig {
        StreamConfig {
            name: self.name,
            broker_connection: self.broker_connection,
            from_topics: self.from_topics,
            to_topics: self.to_topics,
        }
    }
}

/// String-keyed launch properties.
///
/// A `Props` value passed as the sole launch argument selects the
/// zero-argument construction path; if it also carries [`Props::DESCRIBE_KEY`]
/// the launch renders the declared configuration and exits without running
/// the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, String>);

impl Props {
    /// Reserved marker key that triggers describe-and-exit mode.
    pub const DESCRIBE_KEY: &'static str = "rivulet.config.describe";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether the describe marker is present. Only presence matters, not the
    /// value.
    pub fn describe_requested(&self) -> bool {
        self.contains(Self::DESCRIBE_KEY)
    }

    /// Load properties from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_name_joins_group_and_name() {
        let key = TopicKey::new("default", "t1");
        assert_eq!(key.topic_name(), "default-t1");
    }

    #[test]
    fn test_builder_collects_topics_in_order() {
        let config = StreamConfig::builder()
            .name("my-app")
            .broker_connection("broker0:9092")
            .from_topic(TopicKey::new("g", "a"))
            .from_topic(TopicKey::new("g", "b"))
            .to_topic(TopicKey::new("g", "out"))
            .build();

        assert_eq!(config.name.as_deref(), Some("my-app"));
        assert_eq!(config.from_topics.len(), 2);
        assert_eq!(config.from_topics[0].name, "a");
        assert_eq!(config.to_topics[0].topic_name(), "g-out");
    }

    #[test]
    fn test_display_renders_json() {
        let config = StreamConfig::builder()
            .name("echo")
            .from_topic(TopicKey::new("default", "t1"))
            .build();

        let rendered = config.to_string();
        assert!(rendered.starts_with('{'));
        assert!(rendered.contains("\"name\":\"echo\""));
        assert!(rendered.contains("\"t1\""));
    }

    #[test]
    fn test_describe_marker() {
        let props = Props::new().with("some.key", "value");
        assert!(!props.describe_requested());

        let props = props.with(Props::DESCRIBE_KEY, "");
        assert!(props.describe_requested());
        assert_eq!(props.get("some.key"), Some("value"));
    }

    #[test]
    fn test_props_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launch.yaml");
        std::fs::write(&path, "rivulet.config.describe: \"\"\napp.name: echo\n").unwrap();

        let props = Props::from_yaml_file(&path).unwrap();
        assert!(props.describe_requested());
        assert_eq!(props.get("app.name"), Some("echo"));
    }

    #[test]
    fn test_props_missing_file() {
        assert!(Props::from_yaml_file("/nonexistent/launch.yaml").is_err());
    }
}
