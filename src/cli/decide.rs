//! `gatewarden decide` handler.

use crate::cli::{output, DecideArgs};
use crate::config::Config;
use crate::domain::DecideResult;
use crate::error::Result;

pub async fn execute(config: &Config, args: DecideArgs) -> Result<()> {
    let workflow = super::build_workflow(config)?;

    output::section("Decide Application");
    output::key_value("Name", &args.name);
    output::key_value("Verdict", format!("{:?}", args.outcome));

    match workflow.decide(&args.name, args.outcome.into()).await {
        DecideResult::Decided(status) => {
            output::ok(&format!("{} is now {status}", args.name));
        }
        DecideResult::NotFound => {
            output::warn("no application with that name exists");
        }
        DecideResult::AlreadyDecided(status) => {
            output::note(&format!("already {status}; nothing was repeated"));
        }
        DecideResult::GatewayFailed => {
            output::error("the whitelist grant failed; the record stays pending, retry once the server console is reachable");
        }
        DecideResult::StoreFailed => {
            output::error("the decision could not be committed; the record stays pending, retry shortly");
        }
    }

    Ok(())
}
