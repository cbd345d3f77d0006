//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points adapters implement to integrate with
//! external systems: the identity provider, the remote console, the
//! document store, and the applicant notification channel.
//!
//! # Available Ports
//!
//! - [`IdentityVerifier`] - Identity provider lookup
//! - [`ConsoleGateway`] - Remote console command delivery
//! - [`ApplicationStore`] - Application record persistence
//! - [`Notifier`] - Best-effort applicant notifications

mod console;
mod notifier;
mod store;
mod verifier;

pub use console::ConsoleGateway;
pub use notifier::Notifier;
pub use store::ApplicationStore;
pub use verifier::IdentityVerifier;
