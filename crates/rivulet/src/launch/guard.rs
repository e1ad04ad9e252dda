//! Single-use launch gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// One-shot gate: `try_acquire` succeeds exactly once per guard, no matter
/// how many threads race for it. There is no reset.
///
/// Fresh guards can be constructed for embedding and tests; the public
/// [`launch`](super::launch) entry point consumes the process-wide guard
/// from [`LaunchGuard::process`], which is irreversible for the life of the
/// process.
#[derive(Debug, Clone, Default)]
pub struct LaunchGuard {
    used: Arc<AtomicBool>,
}

impl LaunchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide guard. All clones share the same flag.
    pub fn process() -> Self {
        static PROCESS: OnceLock<LaunchGuard> = OnceLock::new();
        PROCESS.get_or_init(LaunchGuard::new).clone()
    }

    /// First caller wins; every later call, from any thread, returns false.
    pub fn try_acquire(&self) -> bool {
        self.used
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}
