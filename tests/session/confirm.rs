use order_form::{
    notify::Severity,
    session::{ConfirmRejected, ConfirmState, SubmissionOutcome},
};

use crate::{StubGateway, session_with};

#[tokio::test]
async fn empty_selection_never_reaches_gateway() {
    let gateway = StubGateway::succeeding();
    let (mut session, notifications) = session_with(gateway.clone());

    let result = session.confirm_selection().await;

    assert_eq!(result, Err(ConfirmRejected::NoFeaturesSelected));
    assert_eq!(session.confirm_state(), ConfirmState::Idle);
    assert_eq!(session.last_outcome(), None);
    assert_eq!(gateway.calls(), 0);
    let emitted = notifications.drain();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].title, "No Features Selected");
    assert_eq!(emitted[0].severity, Severity::Destructive);
}

#[tokio::test]
async fn successful_submission_notifies_and_returns_to_idle() {
    let gateway = StubGateway::succeeding();
    let (mut session, notifications) = session_with(gateway.clone());
    session.toggle_feature("15");
    session.set_comment("15", "monthly plans only");
    session.set_company("Front Desk AI");
    session.set_requirements("Launch in November");

    let result = session.confirm_selection().await;

    assert_eq!(result, Ok(SubmissionOutcome::Succeeded));
    assert_eq!(session.confirm_state(), ConfirmState::Idle);
    assert_eq!(session.last_outcome(), Some(SubmissionOutcome::Succeeded));
    assert!(session.can_confirm());

    let sent = gateway.received();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].timestamp, "2026-10-18T14:00:00.000Z");
    assert_eq!(sent[0].project_info.project_name, "Front Desk AI");
    assert_eq!(sent[0].comments_and_notes.as_deref(), Some("Launch in November"));
    assert_eq!(sent[0].summary.total_cost, 600);
    assert_eq!(
        sent[0].selected_features[0].comment.as_deref(),
        Some("monthly plans only")
    );

    let emitted = notifications.drain();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].title, "Selection Confirmed!");
    assert_eq!(emitted[0].severity, Severity::Normal);
}

#[tokio::test]
async fn failed_submission_keeps_form_state_for_retry() {
    let gateway = StubGateway::failing();
    let (mut session, notifications) = session_with(gateway.clone());
    session.toggle_feature("1");
    session.toggle_feature("18");
    session.set_comment("18", "remember repeat callers");
    let selection_before = session.selection().clone();

    let result = session.confirm_selection().await;

    assert_eq!(result, Ok(SubmissionOutcome::Failed));
    assert_eq!(session.confirm_state(), ConfirmState::Idle);
    assert_eq!(session.last_outcome(), Some(SubmissionOutcome::Failed));
    assert_eq!(session.selection(), &selection_before);
    let emitted = notifications.drain();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].title, "Submission Failed");
    assert_eq!(emitted[0].severity, Severity::Destructive);

    let retry = session.confirm_selection().await;
    assert_eq!(retry, Ok(SubmissionOutcome::Failed));
    assert_eq!(gateway.calls(), 2, "each confirm is exactly one attempt");
}

#[tokio::test]
async fn confirm_is_disabled_while_submitting() {
    let gateway = StubGateway::succeeding();
    let (mut session, notifications) = session_with(gateway.clone());
    session.toggle_feature("7");

    let pending = session.begin_confirm().expect("selection is not empty");
    assert_eq!(session.confirm_state(), ConfirmState::Submitting);
    assert!(!session.can_confirm());
    assert!(matches!(
        session.begin_confirm(),
        Err(ConfirmRejected::AlreadySubmitting)
    ));
    assert!(matches!(
        session.confirm_selection().await,
        Err(ConfirmRejected::AlreadySubmitting)
    ));
    assert!(notifications.drain().is_empty());

    let outcome = pending.send(gateway.as_ref()).await;
    session.finish_confirm(outcome);
    assert!(session.can_confirm());
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn edits_during_flight_do_not_change_the_snapshot() {
    let gateway = StubGateway::succeeding();
    let (mut session, _notifications) = session_with(gateway.clone());
    session.toggle_feature("3");
    session.set_email("before@example.com");

    let pending = session.begin_confirm().expect("selection is not empty");
    session.set_email("after@example.com");
    session.toggle_feature("12");
    session.toggle_comment_input("3");

    let outcome = pending.send(session.gateway().as_ref()).await;
    assert_eq!(session.finish_confirm(outcome), SubmissionOutcome::Succeeded);

    let sent = gateway.received();
    assert_eq!(sent[0].project_info.email, "before@example.com");
    assert_eq!(sent[0].summary.total_selected_features, 1);
    assert_eq!(session.contact().email, "after@example.com");
    assert!(session.selection().is_selected("12"));
}
