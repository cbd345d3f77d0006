//! Remote console port.

use async_trait::async_trait;

use crate::error::GatewayError;

/// Single-command remote console delivery.
///
/// # Delivery semantics
///
/// `send` is at-most-once-attempted: a timeout after the command was
/// transmitted is indistinguishable from non-delivery, and no retry is
/// performed here. Callers must therefore only send commands that are safe
/// to repeat manually (`whitelist add` is idempotent on the server side).
#[async_trait]
pub trait ConsoleGateway: Send + Sync {
    /// Open a connection, authenticate, transmit one command line, and
    /// return the raw textual reply.
    async fn send(&self, command: &str) -> Result<String, GatewayError>;
}
