//! Gatewarden - membership application workflow bot.
//!
//! Accepts structured membership applications, persists them to a document
//! store, and grants game-server access over RCON upon manual approval.
//! The crate is organized hexagonally: the workflow core depends only on
//! port traits, and the adapters bind those ports to the real services.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML with env-var secrets
//! - [`domain`] - Application records, statuses, and operation results
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for the external collaborators
//! - [`adapter`] - Mojang, RCON, Appwrite, and logging implementations
//! - [`service`] - The application lifecycle workflow and event dispatch
//! - [`cli`] - Operator-facing command handlers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gatewarden::adapter::{AppwriteStore, MojangVerifier, RconGateway, TracingNotifier};
//! use gatewarden::config::Config;
//! use gatewarden::service::ApplicationWorkflow;
//!
//! # fn main() -> gatewarden::error::Result<()> {
//! let config = Config::load("gatewarden.toml")?;
//! let workflow = ApplicationWorkflow::new(
//!     Arc::new(MojangVerifier::new(&config.identity)?),
//!     Arc::new(RconGateway::new(&config.console)?),
//!     Arc::new(AppwriteStore::new(&config.store)?),
//!     Arc::new(TracingNotifier::new()),
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
