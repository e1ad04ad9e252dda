//! Stream execution context handed to `StreamApp::start`.

/// Record/byte serialization format a topic is read or written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerdeFormat {
    /// Structured row records.
    Row,
    /// Raw bytes.
    Bytes,
}

/// A topic name coupled with its key and value serialization formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicBinding {
    pub topic: String,
    pub key_format: SerdeFormat,
    pub value_format: SerdeFormat,
}

/// Execution context derived from the declared configuration.
///
/// Every field is optional: the builder passes absent values through as-is
/// and performs no emptiness validation. Malformed or missing values surface
/// downstream, when the application actually uses the context.
#[derive(Debug, Clone, Default)]
pub struct StreamContext {
    app_id: Option<String>,
    broker: Option<String>,
    from: Option<TopicBinding>,
    to: Option<TopicBinding>,
}

impl StreamContext {
    pub fn builder() -> StreamContextBuilder {
        StreamContextBuilder::default()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn broker(&self) -> Option<&str> {
        self.broker.as_deref()
    }

    pub fn from_topic(&self) -> Option<&TopicBinding> {
        self.from.as_ref()
    }

    pub fn to_topic(&self) -> Option<&TopicBinding> {
        self.to.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct StreamContextBuilder {
    app_id: Option<String>,
    broker: Option<String>,
    from: Option<TopicBinding>,
    to: Option<TopicBinding>,
}

impl StreamContextBuilder {
    pub fn app_id(mut self, app_id: Option<String>) -> Self {
        self.app_id = app_id;
        self
    }

    pub fn broker(mut self, broker: Option<String>) -> Self {
        self.broker = broker;
        self
    }

    pub fn from_topic_with(
        mut self,
        topic: Option<String>,
        key_format: SerdeFormat,
        value_format: SerdeFormat,
    ) -> Self {
        self.from = topic.map(|topic| TopicBinding {
            topic,
            key_format,
            value_format,
        });
        self
    }

    pub fn to_topic_with(
        mut self,
        topic: Option<String>,
        key_format: SerdeFormat,
        value_format: SerdeFormat,
    ) -> Self {
        self.to = topic.map(|topic| TopicBinding {
            topic,
            key_format,
            value_format,
        });
        self
    }

    pub fn build(self) -> StreamContext {
        StreamContext {
            app_id: self.app_id,
            broker: self.broker,
            from: self.from,
            to: self.to,
        }
    }
}
