//! Rivulet — launch host for pluggable stream-processing applications.
//!
//! A process embeds an application type implementing [`StreamApp`] and calls
//! [`launch`] (at most once per process). The host constructs the application
//! on a dedicated worker thread, reads its declared [`StreamConfig`], derives
//! the [`StreamContext`] the application will run against, and drives the
//! `init`/`start` lifecycle. The caller blocks until the application finishes
//! or fails; failures are re-raised synchronously with their original cause.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rivulet::prelude::*;
//!
//! #[derive(Default)]
//! struct WordCount;
//!
//! impl StreamApp for WordCount {
//!     fn constructors() -> ConstructorSet<Self> {
//!         ConstructorSet::new().zero_arg_default()
//!     }
//!
//!     fn config(&self) -> anyhow::Result<StreamConfig> {
//!         Ok(StreamConfig::builder()
//!             .name("word-count")
//!             .from_topic(TopicKey::new("default", "lines"))
//!             .to_topic(TopicKey::new("default", "counts"))
//!             .build())
//!     }
//!
//!     fn init(&mut self) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn start(&mut self, ctx: StreamContext, config: &StreamConfig) -> anyhow::Result<()> {
//!         // Consume from ctx.from_topic(), produce to ctx.to_topic()...
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), LaunchError> {
//!     rivulet::launch::setup_logging();
//!     rivulet::launch::launch::<WordCount>()
//! }
//! ```
//!
//! [`StreamApp`]: launch::StreamApp
//! [`launch`]: launch::launch
//! [`StreamConfig`]: config::StreamConfig
//! [`StreamContext`]: context::StreamContext

pub mod conditions;
pub mod config;
pub mod context;
pub mod launch;
pub mod storage;
pub mod topic;

pub mod prelude {
    pub use crate::conditions::Conditions;
    pub use crate::config::{Props, StreamConfig, TopicKey};
    pub use crate::context::{SerdeFormat, StreamContext, TopicBinding};
    pub use crate::launch::{
        launch, launch_with, ConstructorSet, LaunchArgs, LaunchError, StreamApp,
    };
}
