//! Worker execution and the one-shot outcome channel.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tokio::sync::oneshot;

use crate::config::{StreamConfig, TopicKey};
use crate::context::{SerdeFormat, StreamContext};

use super::error::LaunchError;
use super::guard::LaunchGuard;
use super::resolver::{self, LaunchArgs, Resolution};
use super::traits::StreamApp;

/// Worker thread name. One worker per process by construction of the guard.
const WORKER_THREAD_NAME: &str = "rivulet-stream-app";

/// Launch `A` with no arguments, blocking until the application finishes.
///
/// Returns `Ok(())` when the application ran to completion or when
/// describe-and-exit was satisfied; re-raises any captured failure.
pub fn launch<A: StreamApp>() -> Result<(), LaunchError> {
    launch_with::<A>(LaunchArgs::new())
}

/// Launch `A` with the given argument list.
///
/// At most one launch may happen per process; a second call fails with
/// [`LaunchError::AlreadyLaunched`] without spawning a worker. The calling
/// thread never executes application code and blocks, without timeout, until
/// the worker reaches a terminal state.
pub fn launch_with<A: StreamApp>(args: LaunchArgs) -> Result<(), LaunchError> {
    match Launcher::new(LaunchGuard::process()).run::<A>(args) {
        LaunchOutcome::Completed | LaunchOutcome::DescribedAndExited => Ok(()),
        LaunchOutcome::Failed(e) => Err(e),
    }
}

/// Initialize logging with env_logger.
///
/// Respects RUST_LOG environment variable. Defaults to "info" level.
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Terminal result of a launch attempt.
#[derive(Debug)]
pub(crate) enum LaunchOutcome {
    /// `init` then `start` ran to completion.
    Completed,
    /// Describe mode was satisfied; the application never started.
    DescribedAndExited,
    /// A captured failure, classified by where it was raised.
    Failed(LaunchError),
}

/// Session states. Exactly one terminal transition per launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LaunchState {
    Idle,
    Spawning,
    Running,
    Completed,
    Failed,
}

/// One launch attempt: guard, state machine, worker thread, outcome channel.
pub(crate) struct Launcher {
    guard: LaunchGuard,
    state: LaunchState,
}

impl Launcher {
    pub(crate) fn new(guard: LaunchGuard) -> Self {
        Self {
            guard,
            state: LaunchState::Idle,
        }
    }

    fn transition(&mut self, next: LaunchState) {
        log::debug!("launch state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Drive one launch to its terminal state, blocking until the worker
    /// reports through the one-shot channel.
    pub(crate) fn run<A: StreamApp>(mut self, args: LaunchArgs) -> LaunchOutcome {
        if !self.guard.try_acquire() {
            self.transition(LaunchState::Failed);
            return LaunchOutcome::Failed(LaunchError::AlreadyLaunched);
        }

        self.transition(LaunchState::Spawning);
        log::info!("Launching {}", std::any::type_name::<A>());

        let (outcome_tx, outcome_rx) = oneshot::channel();
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let outcome =
                    match panic::catch_unwind(AssertUnwindSafe(|| run_worker::<A>(args))) {
                        Ok(outcome) => outcome,
                        Err(payload) => {
                            LaunchOutcome::Failed(LaunchError::Worker(panic_message(&payload)))
                        }
                    };
                // A closed receiver means the caller is gone; nothing to report to.
                let _ = outcome_tx.send(outcome);
            });

        if let Err(e) = spawned {
            self.transition(LaunchState::Failed);
            return LaunchOutcome::Failed(LaunchError::Io(e));
        }

        self.transition(LaunchState::Running);
        let outcome = match outcome_rx.blocking_recv() {
            Ok(outcome) => outcome,
            Err(_) => LaunchOutcome::Failed(LaunchError::Interrupted(
                "outcome channel closed before the worker reported".to_string(),
            )),
        };

        match &outcome {
            LaunchOutcome::Completed => {
                self.transition(LaunchState::Completed);
                log::info!("Stream application completed");
            }
            LaunchOutcome::DescribedAndExited => {
                self.transition(LaunchState::Completed);
                log::info!("Configuration described; application not started");
            }
            LaunchOutcome::Failed(e) => {
                self.transition(LaunchState::Failed);
                log::error!("Launch failed: {}", e);
            }
        }
        outcome
    }
}

/// Worker body: construct, read config, describe check, derive the context,
/// then drive `init` and `start` strictly in that order.
fn run_worker<A: StreamApp>(args: LaunchArgs) -> LaunchOutcome {
    let (mut app, config) = match resolver::resolve::<A>(args) {
        Ok(Resolution::Ready { app, config }) => (app, config),
        Ok(Resolution::Described) => return LaunchOutcome::DescribedAndExited,
        Err(e) => return LaunchOutcome::Failed(e),
    };

    let context = derive_context(&config);

    if let Err(e) = app.init() {
        return LaunchOutcome::Failed(LaunchError::Application(e));
    }
    if let Err(e) = app.start(context, &config) {
        return LaunchOutcome::Failed(LaunchError::Application(e));
    }
    LaunchOutcome::Completed
}

/// Only the first from/to topic is wired up even when more are declared, and
/// absent values pass through unset; validation belongs to whatever consumes
/// the context.
fn derive_context(config: &StreamConfig) -> StreamContext {
    StreamContext::builder()
        .app_id(config.name.clone())
        .broker(config.broker_connection.clone())
        .from_topic_with(
            config.from_topics.first().map(TopicKey::topic_name),
            SerdeFormat::Row,
            SerdeFormat::Bytes,
        )
        .to_topic_with(
            config.to_topics.first().map(TopicKey::topic_name),
            SerdeFormat::Row,
            SerdeFormat::Bytes,
        )
        .build()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "stream application panicked".to_string()
    }
}
