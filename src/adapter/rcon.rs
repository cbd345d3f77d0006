//! Minecraft RCON console adapter.
//!
//! One connection per command: connect, authenticate, transmit, read the
//! reply, drop the connection. The whole round trip runs under a single
//! timeout so a stalled server never leaves a call pending.

use std::time::Duration;

use async_trait::async_trait;
use rcon::Connection;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::error::GatewayError;
use crate::port::ConsoleGateway;

pub struct RconGateway {
    address: String,
    password: String,
    timeout_secs: u64,
}

impl RconGateway {
    pub fn new(config: &ConsoleConfig) -> Result<Self, GatewayError> {
        let password = config.password.clone().ok_or(GatewayError::Auth)?;
        Ok(Self {
            address: format!("{}:{}", config.host, config.port),
            password,
            timeout_secs: config.timeout_secs,
        })
    }

    async fn round_trip(&self, command: &str) -> Result<String, GatewayError> {
        let mut connection = Connection::<TcpStream>::builder()
            .enable_minecraft_quirks(true)
            .connect(self.address.as_str(), &self.password)
            .await
            .map_err(map_rcon_error)?;

        let reply = connection.cmd(command).await.map_err(map_rcon_error)?;
        debug!(command = %command, reply = %reply, "Console round trip complete");
        Ok(reply)
    }

    /// Send `whitelist list` and parse the reply into player names.
    ///
    /// The server answers `There are N whitelisted player(s): a, b, c`;
    /// an empty allow-list produces no colon-separated tail.
    pub async fn whitelist(&self) -> Result<Vec<String>, GatewayError> {
        let reply = self.send("whitelist list").await?;
        Ok(parse_whitelist_reply(&reply))
    }
}

#[async_trait]
impl ConsoleGateway for RconGateway {
    async fn send(&self, command: &str) -> Result<String, GatewayError> {
        info!(command = %command, "Sending console command");
        timeout(
            Duration::from_secs(self.timeout_secs),
            self.round_trip(command),
        )
        .await
        .map_err(|_| GatewayError::Timeout {
            seconds: self.timeout_secs,
        })?
    }
}

fn map_rcon_error(err: rcon::Error) -> GatewayError {
    match err {
        rcon::Error::Auth => GatewayError::Auth,
        rcon::Error::Io(e) => GatewayError::Connect(e.to_string()),
        other => GatewayError::Command(other.to_string()),
    }
}

fn parse_whitelist_reply(reply: &str) -> Vec<String> {
    match reply.split_once(':') {
        Some((_, names)) => names
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_populated_whitelist_reply() {
        let names = parse_whitelist_reply("There are 3 whitelisted player(s): alice, Bob_77, c0ral");
        assert_eq!(names, vec!["alice", "Bob_77", "c0ral"]);
    }

    #[test]
    fn parses_empty_whitelist_reply() {
        assert!(parse_whitelist_reply("There are no whitelisted players").is_empty());
        assert!(parse_whitelist_reply("There are 0 whitelisted player(s):").is_empty());
    }
}
