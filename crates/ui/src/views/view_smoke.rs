use portal_core::model::{FlowRoute, StepId};

use super::test_harness::{ViewKind, setup_view_harness};

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[test]
fn breadcrumb_marks_steps_around_current() {
    let harness = setup_view_harness(ViewKind::Breadcrumb(2), |_| {});
    let html = harness.render();

    assert!(html.contains("ONBOARDING PROGRESS"), "missing heading in {html}");
    assert_eq!(count(&html, "breadcrumb-item step-completed"), 1, "{html}");
    assert_eq!(count(&html, "breadcrumb-item step-current"), 1, "{html}");
    assert_eq!(count(&html, "breadcrumb-item step-upcoming"), 2, "{html}");
    assert_eq!(count(&html, "breadcrumb-separator--filled"), 1, "{html}");
    assert_eq!(count(&html, "breadcrumb-separator--empty"), 2, "{html}");
    assert!(html.contains("Clear progress"), "missing reset action in {html}");
    assert!(!html.contains("modal-overlay"), "modal should be closed in {html}");
}

#[test]
fn breadcrumb_past_last_step_is_all_completed() {
    let harness = setup_view_harness(ViewKind::Breadcrumb(5), |_| {});
    let html = harness.render();

    assert_eq!(count(&html, "breadcrumb-item step-completed"), 4, "{html}");
    assert_eq!(count(&html, "step-current"), 0, "{html}");
    assert_eq!(count(&html, "step-number"), 0, "{html}");
    assert_eq!(count(&html, "breadcrumb-separator--filled"), 3, "{html}");
}

#[test]
fn breadcrumb_shows_confirmation_for_pending_reset() {
    let harness = setup_view_harness(ViewKind::Breadcrumb(1), |services| {
        let _ = services.reset_flow().request_reset();
    });
    let html = harness.render();

    assert!(
        html.contains("Are you sure you want to clear all progress and start over?"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Cancel"), "missing cancel in {html}");
}

#[test]
fn breadcrumb_tags_items_with_status() {
    let harness = setup_view_harness(ViewKind::Breadcrumb(3), |_| {});
    let html = harness.render();

    assert_eq!(count(&html, r#"data-status="completed""#), 2, "{html}");
    assert_eq!(count(&html, r#"data-status="current""#), 1, "{html}");
    assert_eq!(count(&html, r#"data-status="upcoming""#), 1, "{html}");
}

fn started_session(services: &services::AppServices) {
    let progress = services.progress();
    progress.set_participant_id("P-042").expect("participant");
    progress.record_answer(StepId::new(1), "Excited").expect("answer");
    progress.complete_step(StepId::new(1)).expect("complete");
}

// The confirmation notice schedules its expiry timer on the Tokio runtime.
#[tokio::test(flavor = "current_thread")]
async fn confirmed_reset_clears_session_and_returns_to_welcome() {
    let mut harness = setup_view_harness(ViewKind::Breadcrumb(2), started_session);
    assert!(!harness.storage.snapshot().unwrap().is_empty());

    let request = harness.breadcrumb.request_reset();
    harness.fire(request);
    let html = harness.render();
    assert!(html.contains("modal-overlay"), "modal should open in {html}");

    let confirm = harness.breadcrumb.confirm_reset();
    harness.fire(confirm);
    let html = harness.render();

    assert!(harness.storage.snapshot().unwrap().is_empty());
    assert_eq!(harness.services.progress().current_step(), 1);
    assert!(harness.services.progress().participant_id().is_none());
    assert_eq!(harness.navigations.routes(), vec![FlowRoute::Entry]);
    assert_eq!(count(&html, "Progress cleared"), 1, "toast missing in {html}");
    assert!(!html.contains("modal-overlay"), "modal should close in {html}");
    assert!(harness.services.reset_flow().pending().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn cancelled_reset_changes_nothing() {
    let mut harness = setup_view_harness(ViewKind::Breadcrumb(2), started_session);
    let before = harness.storage.snapshot().unwrap();

    let request = harness.breadcrumb.request_reset();
    harness.fire(request);
    assert!(harness.render().contains("modal-overlay"));

    let cancel = harness.breadcrumb.cancel_reset();
    harness.fire(cancel);
    let html = harness.render();

    assert_eq!(harness.storage.snapshot().unwrap(), before);
    assert_eq!(harness.services.progress().current_step(), 2);
    assert!(harness.navigations.routes().is_empty());
    assert!(!html.contains("Progress cleared"), "unexpected toast in {html}");
    assert!(!html.contains("modal-overlay"), "modal should close in {html}");
    assert!(harness.services.reset_flow().pending().is_none());
}

#[test]
fn dashboard_greets_participant() {
    let harness = setup_view_harness(ViewKind::Dashboard, |services| {
        services.progress().set_participant_id("P-042").expect("participant");
    });
    let html = harness.render();

    assert!(html.contains("Onboarding Complete!"), "missing heading in {html}");
    assert!(html.contains("Great job, Participant P-042!"), "missing greeting in {html}");
    assert!(html.contains("Return to Welcome"), "missing action in {html}");
}

#[test]
fn dashboard_without_participant_renders_empty_id() {
    let harness = setup_view_harness(ViewKind::Dashboard, |_| {});
    let html = harness.render();

    assert!(html.contains("Great job, Participant !"), "missing greeting in {html}");
}

#[test]
fn welcome_offers_begin_then_resume() {
    let fresh = setup_view_harness(ViewKind::Welcome, |_| {});
    let html = fresh.render();
    assert!(html.contains("Begin onboarding"), "missing cta in {html}");

    let started = setup_view_harness(ViewKind::Welcome, |services| {
        let progress = services.progress();
        progress.set_participant_id("P-7").expect("participant");
        progress.complete_step(StepId::new(1)).expect("complete");
    });
    let html = started.render();
    assert!(html.contains("Resume onboarding"), "missing resume in {html}");
    assert!(html.contains("1 of 4 steps complete."), "missing progress in {html}");
    assert!(html.contains("P-7"), "missing prefilled id in {html}");
}

#[test]
fn step_view_renders_current_step_with_sidebar() {
    let harness = setup_view_harness(ViewKind::Step(1), |_| {});
    let html = harness.render();

    assert!(html.contains("Step 1 of 4"), "missing position in {html}");
    assert!(html.contains("step step--active"), "missing active step in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("breadcrumb-item step-current"), "missing sidebar in {html}");
}

#[test]
fn step_view_reviews_completed_and_locks_upcoming() {
    let prepare = |services: &services::AppServices| {
        let progress = services.progress();
        progress.record_answer(StepId::new(1), "Excited").expect("answer");
        progress.complete_step(StepId::new(1)).expect("complete");
    };

    let review = setup_view_harness(ViewKind::Step(1), prepare);
    let html = review.render();
    assert!(html.contains("step step--review"), "missing review in {html}");
    assert!(html.contains("Excited"), "missing saved answer in {html}");

    let locked = setup_view_harness(ViewKind::Step(4), prepare);
    let html = locked.render();
    assert!(html.contains("This step is not available yet."), "missing lock in {html}");
    assert!(html.contains("/step/2"), "missing link to current step in {html}");
}

#[test]
fn step_view_reports_unknown_step() {
    let harness = setup_view_harness(ViewKind::Step(42), |_| {});
    let html = harness.render();
    assert!(html.contains("Step not found"), "missing message in {html}");
}

#[test]
fn harness_leaves_storage_untouched_by_rendering() {
    let harness = setup_view_harness(ViewKind::Step(1), |_| {});
    let _ = harness.render();
    assert!(harness.storage.snapshot().unwrap().is_empty());
    assert_eq!(harness.services.progress().current_step(), 1);
}
