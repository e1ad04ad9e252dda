//! Describe-and-exit through the public entry point.
//!
//! Separate binary from the other integration tests: describe mode consumes
//! the process-wide guard like any other launch.

use std::sync::atomic::{AtomicUsize, Ordering};

use rivulet::prelude::*;

static LIFECYCLE_CALLS: AtomicUsize = AtomicUsize::new(0);

#[derive(Default)]
struct Echo;

impl StreamApp for Echo {
    fn constructors() -> ConstructorSet<Self> {
        ConstructorSet::new().zero_arg_default()
    }

    fn config(&self) -> anyhow::Result<StreamConfig> {
        Ok(StreamConfig::builder()
            .name("echo")
            .from_topic(TopicKey::new("default", "t1"))
            .to_topic(TopicKey::new("default", "t2"))
            .build())
    }

    fn init(&mut self) -> anyhow::Result<()> {
        LIFECYCLE_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn start(&mut self, _ctx: StreamContext, _config: &StreamConfig) -> anyhow::Result<()> {
        LIFECYCLE_CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn describe_returns_ok_without_running_the_application() {
    let props = Props::new().with(Props::DESCRIBE_KEY, "");
    let result = launch_with::<Echo>(LaunchArgs::new().arg(props));

    assert!(result.is_ok());
    assert_eq!(LIFECYCLE_CALLS.load(Ordering::SeqCst), 0);
}
