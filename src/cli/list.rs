//! `gatewarden list` handler.

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

pub async fn execute(config: &Config) -> Result<()> {
    let workflow = super::build_workflow(config)?;
    let pending = workflow.list_pending().await?;

    output::section("Pending Applications");
    if pending.is_empty() {
        output::note("no applicants found");
        return Ok(());
    }

    for application in &pending {
        output::key_value(&application.requested_name, &application.applicant_id);
    }
    output::note(&format!("{} awaiting a decision", pending.len()));

    Ok(())
}
