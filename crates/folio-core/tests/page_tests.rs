// Host-side tests for the page controller: contact flow, modal, scroll and likes.

use folio_core::{
    Catalog, ContactError, ContactForm, ContactState, ContactView, PageController,
    CONFIRMATION_BODY,
};

fn controller() -> PageController {
    PageController::new(Catalog::portfolio().expect("catalog"))
}

fn jane() -> ContactForm {
    ContactForm::new("Jane Doe", "jane@example.com", "Hello")
}

fn open_form(c: &mut PageController) {
    assert!(c.start_conversation());
    assert_eq!(c.state().contact, ContactState::FormOpen { pending: false });
}

#[test]
fn initial_state_is_all_defaults() {
    let c = controller();
    let s = c.state();
    assert_eq!(s.likes, 0);
    assert_eq!(s.selected_project, None);
    assert_eq!(s.contact, ContactState::Idle);
    assert!(!s.show_scroll_to_top);
    assert_eq!(c.view().contact, ContactView::Invite);
}

#[test]
fn idle_only_leaves_via_start_conversation() {
    let mut c = controller();
    assert!(!c.close_form());
    assert!(!c.send_another());
    assert_eq!(c.begin_submit(&jane()), Err(ContactError::NotAccepting));
    assert_eq!(c.finish_submit(Ok(200)), Err(ContactError::NotAccepting));
    assert_eq!(c.state().contact, ContactState::Idle);
    open_form(&mut c);
}

#[test]
fn form_open_closes_straight_to_idle() {
    let mut c = controller();
    open_form(&mut c);
    assert!(!c.start_conversation());
    assert!(!c.send_another());
    assert!(c.close_form());
    assert_eq!(c.state().contact, ContactState::Idle);
}

#[test]
fn only_successful_submission_reaches_submitted() {
    let mut c = controller();
    open_form(&mut c);

    c.begin_submit(&jane()).unwrap();
    assert_eq!(c.view().contact, ContactView::Form { submitting: true });
    assert!(c.finish_submit(Ok(500)).is_err());
    assert_eq!(c.state().contact, ContactState::FormOpen { pending: false });

    c.begin_submit(&jane()).unwrap();
    assert!(c.finish_submit(Err("network down".into())).is_err());
    assert_eq!(c.state().contact, ContactState::FormOpen { pending: false });

    c.begin_submit(&jane()).unwrap();
    c.finish_submit(Ok(204)).unwrap();
    assert_eq!(c.state().contact, ContactState::Submitted);
}

#[test]
fn submitted_only_returns_via_send_another() {
    let mut c = controller();
    open_form(&mut c);
    c.begin_submit(&jane()).unwrap();
    c.finish_submit(Ok(200)).unwrap();

    assert!(!c.start_conversation());
    assert!(!c.close_form());
    assert_eq!(c.begin_submit(&jane()), Err(ContactError::NotAccepting));
    assert!(c.send_another());
    assert_eq!(c.state().contact, ContactState::Idle);
}

#[test]
fn pending_submission_blocks_close_and_resubmit() {
    let mut c = controller();
    open_form(&mut c);
    c.begin_submit(&jane()).unwrap();
    assert!(!c.close_form());
    assert_eq!(c.begin_submit(&jane()), Err(ContactError::Pending));
    assert_eq!(c.attempts(), 1);
}

#[test]
fn invalid_form_never_starts_an_attempt() {
    let mut c = controller();
    open_form(&mut c);
    let err = c
        .begin_submit(&ContactForm::new("Jane Doe", "", "Hello"))
        .unwrap_err();
    assert!(matches!(err, ContactError::MissingField(_)));
    assert_eq!(c.attempts(), 0);
    assert_eq!(c.state().contact, ContactState::FormOpen { pending: false });
}

#[test]
fn identical_submissions_are_independent_attempts() {
    let mut c = controller();
    open_form(&mut c);
    let first = c.begin_submit(&jane()).unwrap();
    c.finish_submit(Ok(503)).unwrap_err();
    let second = c.begin_submit(&jane()).unwrap();
    assert_eq!(first.body, second.body);
    assert_ne!(first.attempt, second.attempt);
    assert_eq!(c.attempts(), 2);
}

#[test]
fn end_to_end_success_shows_confirmation() {
    let mut c = controller();
    open_form(&mut c);
    let req = c.begin_submit(&jane()).unwrap();
    assert_eq!(req.endpoint, "/");
    assert_eq!(req.content_type, "application/x-www-form-urlencoded");
    c.finish_submit(Ok(200)).unwrap();
    assert_eq!(c.view().contact, ContactView::Confirmation);
    assert!(CONFIRMATION_BODY.contains("Thank you"));
}

#[test]
fn end_to_end_server_error_keeps_form_and_reports() {
    let mut c = controller();
    open_form(&mut c);
    c.begin_submit(&jane()).unwrap();
    let err = c.finish_submit(Ok(500)).unwrap_err();
    assert_eq!(err, ContactError::Rejected { status: 500 });
    assert!(err.to_string().contains("Form submission failed"));
    assert_eq!(c.view().contact, ContactView::Form { submitting: false });
}

#[test]
fn scroll_to_top_threshold_is_strict() {
    let mut c = controller();
    assert!(c.on_scroll(401.0));
    assert!(c.view().show_scroll_to_top);
    assert!(!c.on_scroll(500.0));
    assert!(c.on_scroll(399.0));
    assert!(!c.view().show_scroll_to_top);
    c.on_scroll(400.0);
    assert!(!c.view().show_scroll_to_top);
}

#[test]
fn three_likes_read_three() {
    let mut c = controller();
    for _ in 0..3 {
        c.like();
    }
    assert_eq!(c.view().likes_label(), "3");
}

#[test]
fn modal_follows_selected_project_only() {
    let mut c = controller();
    assert!(c.view().modal.is_none());
    let title = c.select_project(1).map(|p| p.title.clone());
    assert_eq!(title.as_deref(), Some("Iron Vault Gym"));
    assert_eq!(c.view().modal.map(|p| p.title.as_str()), Some("Iron Vault Gym"));

    // out of range keeps the current selection
    c.select_project(99);
    assert_eq!(c.state().selected_project, Some(1));

    // modal does not touch the contact flow
    assert!(c.start_conversation());
    assert!(c.close_modal());
    assert!(!c.close_modal());
    assert!(c.view().modal.is_none());
    assert_eq!(c.state().contact, ContactState::FormOpen { pending: false });
}
