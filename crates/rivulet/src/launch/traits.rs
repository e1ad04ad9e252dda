//! Core trait for launchable stream applications.

use crate::config::StreamConfig;
use crate::context::StreamContext;

use super::resolver::ConstructorSet;

/// The contract every launchable application must expose.
///
/// The launch host depends on exactly four capabilities: the construction
/// strategies, the configuration accessor, and the `init`/`start` lifecycle
/// hooks. `init` always completes before `start` begins, and both run on the
/// worker thread, never on the caller.
///
/// # Example
///
/// ```rust,ignore
/// use rivulet::prelude::*;
///
/// #[derive(Default)]
/// struct Echo;
///
/// impl StreamApp for Echo {
///     fn constructors() -> ConstructorSet<Self> {
///         ConstructorSet::new().zero_arg_default()
///     }
///
///     fn config(&self) -> anyhow::Result<StreamConfig> {
///         Ok(StreamConfig::builder()
///             .from_topic(TopicKey::new("default", "t1"))
///             .to_topic(TopicKey::new("default", "t2"))
///             .build())
///     }
///
///     fn init(&mut self) -> anyhow::Result<()> {
///         Ok(())
///     }
///
///     fn start(&mut self, ctx: StreamContext, config: &StreamConfig) -> anyhow::Result<()> {
///         // Main loop; may block for the lifetime of the stream.
///         Ok(())
///     }
/// }
/// ```
pub trait StreamApp: Send + 'static {
    /// Construction strategies for this application.
    ///
    /// The default registers nothing, so a type that declares no strategies
    /// fails resolution for every argument list.
    fn constructors() -> ConstructorSet<Self>
    where
        Self: Sized,
    {
        ConstructorSet::new()
    }

    /// Declared configuration. Invoked once per launch, right after
    /// construction and before any lifecycle hook.
    fn config(&self) -> anyhow::Result<StreamConfig>;

    /// Called once, before `start`.
    fn init(&mut self) -> anyhow::Result<()>;

    /// Main body. Runs after `init` returns and may block for the lifetime
    /// of a long-running stream.
    fn start(&mut self, ctx: StreamContext, config: &StreamConfig) -> anyhow::Result<()>;
}
