//! Application launch host.
//!
//! Enforces at-most-one launch per process, resolves the application's entry
//! point from a variable argument list, and runs the whole lifecycle on a
//! dedicated worker thread whose outcome is reported back to the caller
//! through a one-shot channel.

mod error;
mod guard;
mod resolver;
mod runner;
mod traits;

pub use error::LaunchError;
pub use guard::LaunchGuard;
pub use resolver::{ConstructorSet, LaunchArgs};
pub use runner::{launch, launch_with, setup_logging};
pub use traits::StreamApp;
