//! Fluent builder for topic-creation requests.

use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

/// Broker option key for the cleanup policy.
pub const CLEANUP_POLICY: &str = "cleanup.policy";

const CLEANUP_COMPACT: &str = "compact";
const CLEANUP_DELETE: &str = "delete";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("topic name must be non-empty")]
    MissingName,

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("conflicting option '{key}': previous '{previous}', new '{new}'")]
    ConflictingOption {
        key: String,
        previous: String,
        new: String,
    },
}

/// A validated topic-creation request, ready to hand to a broker client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSpec {
    pub name: String,
    pub partitions: u32,
    pub replications: u16,
    pub options: BTreeMap<String, String>,
    pub timeout: Duration,
}

/// Builder for [`TopicSpec`].
///
/// Option conflicts (e.g. `compacted()` after `deleted()`) are recorded when
/// they happen and surfaced by `build`, so the fluent chain stays infallible.
#[derive(Debug, Clone)]
pub struct TopicCreator {
    name: Option<String>,
    partitions: u32,
    replications: u16,
    options: BTreeMap<String, String>,
    timeout: Duration,
    conflict: Option<TopicError>,
}

impl Default for TopicCreator {
    fn default() -> Self {
        Self {
            name: None,
            partitions: 1,
            replications: 1,
            options: BTreeMap::new(),
            timeout: Duration::from_secs(10),
            conflict: None,
        }
    }
}

impl TopicCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Default is 1.
    pub fn partitions(mut self, partitions: u32) -> Self {
        self.partitions = partitions;
        self
    }

    /// Default is 1.
    pub fn replications(mut self, replications: u16) -> Self {
        self.replications = replications;
        self
    }

    /// Replace all options.
    pub fn options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = options;
        self
    }

    /// Keep the latest value for each key when cleaning up.
    pub fn compacted(self) -> Self {
        self.merge_option(CLEANUP_POLICY, CLEANUP_COMPACT)
    }

    /// Drop data on cleanup instead of compacting. This is the broker default.
    pub fn deleted(self) -> Self {
        self.merge_option(CLEANUP_POLICY, CLEANUP_DELETE)
    }

    /// Default is 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn merge_option(mut self, key: &str, value: &str) -> Self {
        match self.options.get(key) {
            Some(previous) if previous != value => {
                if self.conflict.is_none() {
                    self.conflict = Some(TopicError::ConflictingOption {
                        key: key.to_string(),
                        previous: previous.clone(),
                        new: value.to_string(),
                    });
                }
            }
            _ => {
                self.options.insert(key.to_string(), value.to_string());
            }
        }
        self
    }

    pub fn build(self) -> Result<TopicSpec, TopicError> {
        if let Some(conflict) = self.conflict {
            return Err(conflict);
        }
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(TopicError::MissingName),
        };
        if self.partitions == 0 {
            return Err(TopicError::NonPositive("partitions"));
        }
        if self.replications == 0 {
            return Err(TopicError::NonPositive("replications"));
        }

        Ok(TopicSpec {
            name,
            partitions: self.partitions,
            replications: self.replications,
            options: self.options,
            timeout: self.timeout,
        })
    }
}
