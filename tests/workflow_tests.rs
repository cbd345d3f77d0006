//! End-to-end workflow coverage over the mock adapters.

use std::sync::Arc;

use gatewarden::domain::{
    AnswerSet, ApplicantId, ApplicationStatus, DecideResult, DecisionOutcome, SubmitResult,
};
use gatewarden::port::{ApplicationStore, ConsoleGateway, Notifier};
use gatewarden::service::{ApplicationWorkflow, EventOutcome, GatewayEvent};
use gatewarden::testkit::{MemoryStore, RecordingConsole, RecordingNotifier, StaticVerifier};

fn answers() -> AnswerSet {
    AnswerSet {
        about: "I run a villager trading hall".into(),
        timezone_age: "CET, 22".into(),
        playtime: "since 1.8".into(),
        playstyle: "redstone, villager farming".into(),
    }
}

struct World {
    workflow: Arc<ApplicationWorkflow>,
    console: Arc<RecordingConsole>,
    store: Arc<MemoryStore>,
    notifier: Arc<RecordingNotifier>,
}

fn world(known_names: &[&str]) -> World {
    let console = Arc::new(RecordingConsole::new());
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let workflow = Arc::new(ApplicationWorkflow::new(
        Arc::new(StaticVerifier::new(known_names)),
        Arc::clone(&console) as Arc<dyn ConsoleGateway>,
        Arc::clone(&store) as Arc<dyn ApplicationStore>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    ));
    World {
        workflow,
        console,
        store,
        notifier,
    }
}

#[tokio::test]
async fn submit_then_accept_happy_path() {
    let w = world(&["alice"]);

    let submitted = w
        .workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    assert!(submitted.is_submitted());

    let decided = w.workflow.decide("alice", DecisionOutcome::Accept).await;
    assert_eq!(decided, DecideResult::Decided(ApplicationStatus::Accepted));

    let stored = w.store.find("alice").expect("record should exist");
    assert_eq!(stored.application.status, ApplicationStatus::Accepted);
    assert_eq!(w.console.sent(), vec!["whitelist add alice"]);
}

#[tokio::test]
async fn bogus_name_leaves_zero_records() {
    let w = world(&["alice"]);

    let result = w
        .workflow
        .submit(ApplicantId::new("discord-1"), "bogus_name_123", answers())
        .await;

    assert_eq!(result, SubmitResult::Invalid);
    assert_eq!(w.store.create_calls(), 0);
    assert_eq!(w.store.record_count(), 0);
}

#[tokio::test]
async fn store_failure_on_create_is_reported_not_retried() {
    let w = world(&["alice"]);
    w.store.fail_next_create();

    let result = w
        .workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;

    assert_eq!(result, SubmitResult::StoreFailed);
    assert_eq!(w.store.create_calls(), 1);
    assert_eq!(w.store.record_count(), 0);
}

#[tokio::test]
async fn accept_on_accepted_application_repeats_nothing() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    w.workflow.decide("alice", DecisionOutcome::Accept).await;

    let again = w.workflow.decide("alice", DecisionOutcome::Accept).await;

    assert_eq!(
        again,
        DecideResult::AlreadyDecided(ApplicationStatus::Accepted)
    );
    assert_eq!(w.console.sent().len(), 1);
    assert_eq!(w.notifier.notices().len(), 1);
}

#[tokio::test]
async fn gateway_failure_blocks_the_commit() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    w.console.fail_next("timed out");

    let result = w.workflow.decide("alice", DecisionOutcome::Accept).await;

    assert_eq!(result, DecideResult::GatewayFailed);
    let stored = w.store.find("alice").unwrap();
    assert!(stored.application.status.is_pending());
    assert!(w.console.sent().is_empty());
}

#[tokio::test]
async fn reject_notifies_without_touching_the_console() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;

    let result = w.workflow.decide("alice", DecisionOutcome::Reject).await;

    assert_eq!(result, DecideResult::Decided(ApplicationStatus::Rejected));
    assert!(w.console.sent().is_empty());
    let notices = w.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, ApplicantId::new("discord-1"));
    assert_eq!(notices[0].1, DecisionOutcome::Reject);
}

#[tokio::test]
async fn rejected_applicant_can_reapply_and_be_accepted() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    w.workflow.decide("alice", DecisionOutcome::Reject).await;

    let again = w
        .workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    assert!(again.is_submitted());

    // The old rejected record must not shadow the fresh pending one.
    let result = w.workflow.decide("alice", DecisionOutcome::Accept).await;
    assert_eq!(result, DecideResult::Decided(ApplicationStatus::Accepted));
    assert_eq!(w.console.sent(), vec!["whitelist add alice"]);
    assert!(w.workflow.list_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn pending_listing_tracks_decisions() {
    let w = world(&["alice", "bob", "carol"]);
    for (id, name) in [("d-1", "alice"), ("d-2", "bob"), ("d-3", "carol")] {
        w.workflow
            .submit(ApplicantId::new(id), name, answers())
            .await;
    }
    w.workflow.decide("alice", DecisionOutcome::Accept).await;
    w.workflow.decide("bob", DecisionOutcome::Reject).await;

    let pending = w.workflow.list_pending().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].requested_name, "carol");
}

#[tokio::test]
async fn concurrent_decisions_settle_exactly_once() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;

    let a = {
        let workflow = Arc::clone(&w.workflow);
        tokio::spawn(async move { workflow.decide("alice", DecisionOutcome::Accept).await })
    };
    let b = {
        let workflow = Arc::clone(&w.workflow);
        tokio::spawn(async move { workflow.decide("alice", DecisionOutcome::Accept).await })
    };

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    let decided = [&a, &b].iter().filter(|r| r.is_decided()).count();
    assert_eq!(decided, 1, "exactly one decision must commit");
    assert_eq!(w.console.sent().len(), 1, "the grant must not repeat");
}

#[tokio::test]
async fn decisions_on_different_names_are_independent() {
    let w = world(&["alice", "bob"]);
    w.workflow
        .submit(ApplicantId::new("d-1"), "alice", answers())
        .await;
    w.workflow
        .submit(ApplicantId::new("d-2"), "bob", answers())
        .await;

    let a = {
        let workflow = Arc::clone(&w.workflow);
        tokio::spawn(async move { workflow.decide("alice", DecisionOutcome::Accept).await })
    };
    let b = {
        let workflow = Arc::clone(&w.workflow);
        tokio::spawn(async move { workflow.decide("bob", DecisionOutcome::Reject).await })
    };

    assert!(a.await.unwrap().is_decided());
    assert!(b.await.unwrap().is_decided());
    assert_eq!(w.console.sent(), vec!["whitelist add alice"]);
}

#[tokio::test]
async fn dispatch_routes_events_to_operations() {
    let w = world(&["alice"]);

    let outcome = w
        .workflow
        .dispatch(GatewayEvent::Submit {
            applicant_id: ApplicantId::new("discord-1"),
            requested_name: "alice".into(),
            answers: answers(),
        })
        .await;
    assert!(matches!(
        outcome,
        EventOutcome::Submitted(SubmitResult::Submitted(_))
    ));

    let outcome = w
        .workflow
        .dispatch(GatewayEvent::Decide {
            requested_name: "alice".into(),
            outcome: DecisionOutcome::Accept,
        })
        .await;
    assert_eq!(
        outcome,
        EventOutcome::Decided(DecideResult::Decided(ApplicationStatus::Accepted))
    );
}

#[tokio::test]
async fn store_lookup_failure_during_decide_is_surfaced() {
    let w = world(&["alice"]);
    w.workflow
        .submit(ApplicantId::new("discord-1"), "alice", answers())
        .await;
    w.store.fail_next_find();

    let result = w.workflow.decide("alice", DecisionOutcome::Accept).await;
    assert_eq!(result, DecideResult::StoreFailed);
    assert!(w.console.sent().is_empty());
}
