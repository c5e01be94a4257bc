// src/tests/router_tests/complaint_tests.rs

use crate::api::ApiError;
use crate::submission::{ComplaintRequest, ComplaintTransport};
use crate::tests::utils::{
    app_with_transport, body_string, get, location, open_form, post_form, test_app,
};
use std::sync::{mpsc, Mutex};
use std::thread;

const VALID_FORM: &str =
    "description=Large+pothole+near+exit+12&contact_email=&consent=true&action=submit";

#[test]
fn valid_submission_posts_once_and_returns_to_detail() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}"), VALID_FORM);

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/projects/1?notice=submitted");

    let sent = t.transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].field("projectId"), Some("1"));
    assert_eq!(sent[0].field("description"), Some("Large pothole near exit 12"));
    assert_eq!(sent[0].field("consentGiven"), Some("true"));
    assert!(sent[0].attachments.is_empty());

    // The form is gone once submitted
    assert_eq!(get(&t.app, &format!("/complaints/{token}")).status(), 404);
}

#[test]
fn invalid_submission_shows_every_error_and_sends_nothing() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(
        &t.app,
        &format!("/complaints/{token}"),
        "description=short&contact_email=bad&action=submit",
    );

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains("Description must be at least 10 characters"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("You must consent to submit personal media"));

    // Typed values survive the round trip
    assert!(body.contains("short"));
    assert!(t.transport.sent.lock().unwrap().is_empty());
}

#[test]
fn empty_description_is_required() {
    let t = test_app(201);
    let token = open_form(&t.app, "2");

    let resp = post_form(
        &t.app,
        &format!("/complaints/{token}"),
        "description=+++&contact_email=&consent=true&action=submit",
    );

    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Description is required"));
}

#[test]
fn rejected_submission_keeps_the_form_with_a_failure_notice() {
    let t = test_app(500);
    let token = open_form(&t.app, "1");
    let form_uri = format!("/complaints/{token}");

    let resp = post_form(&t.app, &form_uri, VALID_FORM);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), form_uri);

    let body = body_string(get(&t.app, &form_uri));
    assert!(body.contains("Submission Failed"));
    assert!(body.contains("Unable to submit your complaint. Please try again later."));
    assert!(body.contains("Large pothole near exit 12"));

    // Notices are shown once
    let body = body_string(get(&t.app, &form_uri));
    assert!(!body.contains("Submission Failed"));
}

#[test]
fn no_content_counts_as_failure() {
    let t = test_app(204);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}"), VALID_FORM);

    assert_eq!(location(&resp), format!("/complaints/{token}"));
    assert_eq!(t.transport.sent.lock().unwrap().len(), 1);
}

#[test]
fn back_discards_the_form() {
    let t = test_app(201);
    let token = open_form(&t.app, "2");

    let resp = post_form(&t.app, &format!("/complaints/{token}"), "action=back");

    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/projects/2");
    assert_eq!(t.app.sessions.len(), 0);
}

/// Parks inside `send` until the test lets it go.
struct GatedTransport {
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl ComplaintTransport for GatedTransport {
    fn send(&self, _request: &ComplaintRequest) -> Result<u16, ApiError> {
        self.entered.lock().unwrap().send(()).unwrap();
        self.release.lock().unwrap().recv().unwrap();
        Ok(201)
    }
}

#[test]
fn second_submit_while_first_is_in_flight_is_refused() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let app = app_with_transport(Box::new(GatedTransport {
        entered: Mutex::new(entered_tx),
        release: Mutex::new(release_rx),
    }));
    let token = open_form(&app, "1");
    let form_uri = format!("/complaints/{token}");

    thread::scope(|s| {
        let first = s.spawn(|| {
            let resp = post_form(&app, &form_uri, VALID_FORM);
            (resp.status().as_u16(), location(&resp))
        });

        entered_rx.recv().unwrap();
        let second = post_form(&app, &form_uri, VALID_FORM);
        assert_eq!(second.status(), 409);
        assert!(body_string(second).contains("Your complaint is already being submitted"));

        release_tx.send(()).unwrap();
        let (status, loc) = first.join().unwrap();
        assert_eq!(status, 303);
        assert_eq!(loc, "/projects/1?notice=submitted");
    });
}

#[test]
fn form_held_elsewhere_is_a_conflict() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let handle = t.app.sessions.get(&token).unwrap().expect("session exists");
    let _held = handle.hold();

    let resp = post_form(&t.app, &format!("/complaints/{token}"), VALID_FORM);

    assert_eq!(resp.status(), 409);
    assert!(body_string(resp).contains("This form is busy"));
    assert!(t.transport.sent.lock().unwrap().is_empty());
}

#[test]
fn enter_key_default_button_is_submit() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let body = body_string(get(&t.app, &format!("/complaints/{token}")));

    let first_action = body
        .find(r#"name="action" value=""#)
        .expect("form has action buttons");
    let rest = &body[first_action + r#"name="action" value=""#.len()..];
    assert!(rest.starts_with("submit\""), "first action button is {rest:.20}");
}

#[test]
fn unknown_action_is_a_bad_request() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}"), "action=explode");

    assert_eq!(resp.status(), 400);
}

#[test]
fn malformed_token_is_not_found() {
    let t = test_app(201);

    assert_eq!(get(&t.app, "/complaints/not-a-token!").status(), 404);
}
