//! Join-condition pairs for stream operations.

/// Ordered list of left-key/right-key pairs describing how two streams join.
///
/// Keys must appear in the data header of the respective side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    pairs: Vec<(String, String)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a left-key/right-key pair. Multiple pairs can be added for
    /// different situations.
    pub fn add(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.pairs.push((left.into(), right.into()));
        self
    }

    pub fn add_all(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.pairs.extend(pairs);
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
