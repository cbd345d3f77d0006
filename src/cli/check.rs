//! `gatewarden check` diagnostic handlers.

use clap::Parser;

use crate::adapter::{AppwriteStore, MojangVerifier, RconGateway};
use crate::cli::output;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::port::{ApplicationStore, IdentityVerifier};

#[derive(Parser, Debug)]
pub struct IdentityArgs {
    /// Username to look up
    pub name: String,
}

/// Validate the configuration file and report what was loaded.
pub fn execute_config(config: &Config) -> Result<()> {
    output::section("Config Check");
    output::key_value("Identity", &config.identity.endpoint);
    output::key_value("Console", format!("{}:{}", config.console.host, config.console.port));
    output::key_value("Store", &config.store.endpoint);
    output::key_value("Collection", &config.store.collection_id);

    if config.console.password.is_none() {
        output::warn("RCON_PASSWORD is not set");
    }
    if config.store.api_key.is_none() {
        output::warn("APPWRITE_API_KEY is not set");
    }
    output::ok("configuration is valid");
    Ok(())
}

/// Look one name up against the identity provider.
pub async fn execute_identity(config: &Config, args: IdentityArgs) -> Result<()> {
    let verifier = MojangVerifier::new(&config.identity)?;

    output::section("Identity Check");
    output::key_value("Name", &args.name);

    match verifier.canonical_name(&args.name).await {
        Some(canonical) => output::ok(&format!("recognized as {canonical}")),
        None => output::warn("not recognized (or the provider was unreachable)"),
    }
    Ok(())
}

/// Round-trip the remote console and print the current allow-list.
pub async fn execute_console(config: &Config) -> Result<()> {
    if config.console.password.is_none() {
        return Err(ConfigError::MissingSecret { var: "RCON_PASSWORD" }.into());
    }
    let gateway = RconGateway::new(&config.console)?;

    output::section("Console Check");
    let whitelist = gateway.whitelist().await?;
    output::ok(&format!("console reachable, {} whitelisted", whitelist.len()));
    for name in whitelist {
        output::note(&format!("  {name}"));
    }
    Ok(())
}

/// Query the document store for pending applications.
pub async fn execute_store(config: &Config) -> Result<()> {
    if config.store.api_key.is_none() {
        return Err(ConfigError::MissingSecret { var: "APPWRITE_API_KEY" }.into());
    }
    let store = AppwriteStore::new(&config.store)?;

    output::section("Store Check");
    let pending = store.list_pending().await?;
    output::ok(&format!("store reachable, {} pending", pending.len()));
    Ok(())
}
