//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Mocks
//!
//! - [`StaticVerifier`] — a fixed roster of known names.
//! - [`RecordingConsole`] — records commands, scriptable failures.
//! - [`MemoryStore`] — in-memory application store with failure injection.
//! - [`RecordingNotifier`] — captures applicant notices.

mod console;
mod notifier;
mod store;
mod verifier;

pub use console::RecordingConsole;
pub use notifier::RecordingNotifier;
pub use store::MemoryStore;
pub use verifier::StaticVerifier;
