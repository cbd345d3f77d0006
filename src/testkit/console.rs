use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::GatewayError;
use crate::port::ConsoleGateway;

/// Console gateway that records every command it is asked to send.
///
/// Replies `Added <name> to the whitelist` style acknowledgements by
/// default; queue a failure with [`RecordingConsole::fail_next`].
#[derive(Default)]
pub struct RecordingConsole {
    sent: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `send` fail with a connection error.
    pub fn fail_next(&self, reason: &str) {
        self.failures.lock().push(reason.to_string());
    }

    /// Commands sent so far, in order. Failed attempts are not recorded,
    /// matching a connection that never carried the command.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl ConsoleGateway for RecordingConsole {
    async fn send(&self, command: &str) -> Result<String, GatewayError> {
        if let Some(reason) = self.failures.lock().pop() {
            return Err(GatewayError::Connect(reason));
        }
        self.sent.lock().push(command.to_string());
        Ok(format!("Executed: {command}"))
    }
}
