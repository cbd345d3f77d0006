//! `gatewarden show` handler.

use crate::cli::{output, ShowArgs};
use crate::config::Config;
use crate::error::Result;

pub async fn execute(config: &Config, args: ShowArgs) -> Result<()> {
    let workflow = super::build_workflow(config)?;

    let Some(stored) = workflow.find_application(&args.name).await? else {
        output::warn("no application with that name exists");
        return Ok(());
    };

    output::section(&format!("{}'s Application", stored.application.requested_name));
    output::key_value("Applicant", &stored.application.applicant_id);
    output::key_value("Status", stored.application.status);
    output::key_value("Submitted", stored.application.created_at.to_rfc3339());

    for (question, answer) in stored.application.form_fields() {
        output::note("");
        output::note(question);
        output::note(&format!("  {answer}"));
    }

    Ok(())
}
