//! Command-line interface definitions.
//!
//! The CLI is the in-repo presentation adapter: it wires the real adapters
//! into the workflow and renders typed results as operator-facing text.

pub mod check;
pub mod decide;
pub mod list;
pub mod output;
pub mod show;
pub mod submit;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};

use crate::adapter::{AppwriteStore, MojangVerifier, RconGateway, TracingNotifier};
use crate::config::Config;
use crate::domain::DecisionOutcome;
use crate::error::Result;
use crate::service::ApplicationWorkflow;

/// Gatewarden - membership application workflow bot.
#[derive(Parser, Debug)]
#[command(name = "gatewarden")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "gatewarden.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit an application on behalf of a candidate
    Submit(SubmitArgs),

    /// Accept or reject a pending application
    Decide(DecideArgs),

    /// List applications awaiting a decision
    List,

    /// Show one application's answers in full
    Show(ShowArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Chat-platform identity of the applicant
    #[arg(long)]
    pub applicant_id: String,

    /// Minecraft username to verify and whitelist
    #[arg(long)]
    pub name: String,

    /// "Tell us a little bit about yourself."
    #[arg(long)]
    pub about: String,

    /// "What is your time zone and your age?"
    #[arg(long)]
    pub timezone_age: String,

    /// "How long have you been playing Minecraft?"
    #[arg(long)]
    pub playtime: String,

    /// "What type of playstyle are you?"
    #[arg(long)]
    pub playstyle: String,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Requested name of the application to display
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct DecideArgs {
    /// Requested name of the application to decide
    pub name: String,

    /// The verdict to commit
    #[arg(value_enum)]
    pub outcome: Verdict,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Verdict {
    Accept,
    Reject,
}

impl From<Verdict> for DecisionOutcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accept => DecisionOutcome::Accept,
            Verdict::Reject => DecisionOutcome::Reject,
        }
    }
}

/// Subcommands for `gatewarden check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config,
    /// Look a name up against the identity provider
    Identity(check::IdentityArgs),
    /// Round-trip the remote console and print the allow-list
    Console,
    /// Query the document store for pending applications
    Store,
}

/// Wire the real adapters into a workflow instance.
pub fn build_workflow(config: &Config) -> Result<ApplicationWorkflow> {
    config.require_secrets()?;

    let verifier = Arc::new(MojangVerifier::new(&config.identity)?);
    let console = Arc::new(RconGateway::new(&config.console)?);
    let store = Arc::new(AppwriteStore::new(&config.store)?);
    let notifier = Arc::new(TracingNotifier::new());

    Ok(ApplicationWorkflow::new(verifier, console, store, notifier))
}
