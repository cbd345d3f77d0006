//! `gatewarden submit` handler.

use crate::cli::{output, SubmitArgs};
use crate::config::Config;
use crate::domain::{AnswerSet, ApplicantId, SubmitResult};
use crate::error::Result;

pub async fn execute(config: &Config, args: SubmitArgs) -> Result<()> {
    let workflow = super::build_workflow(config)?;

    let answers = AnswerSet {
        about: args.about,
        timezone_age: args.timezone_age,
        playtime: args.playtime,
        playstyle: args.playstyle,
    };

    output::section("Submit Application");
    output::key_value("Applicant", &args.applicant_id);
    output::key_value("Name", &args.name);

    match workflow
        .submit(ApplicantId::new(args.applicant_id), &args.name, answers)
        .await
    {
        SubmitResult::Submitted(record_id) => {
            output::ok(&format!("application stored as {record_id}"));
            output::note("notify your reviewers to run `gatewarden list`");
        }
        SubmitResult::Invalid => {
            output::warn("that Minecraft username was not recognized; check the spelling and submit again");
        }
        SubmitResult::AlreadyPending => {
            output::warn("a pending application already exists for that name");
        }
        SubmitResult::StoreFailed => {
            output::error("the application could not be stored; contact staff for help");
        }
    }

    Ok(())
}
