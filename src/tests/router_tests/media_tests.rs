// src/tests/router_tests/media_tests.rs

use crate::media::{PickerErrorCode, PickerRequest, PickerResponse};
use crate::tests::utils::{asset, body_string, get, location, open_form, post_form, test_app};

const MIB: u64 = 1024 * 1024;

#[test]
fn attach_action_leads_to_the_chooser() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}"), "action=attach");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), format!("/complaints/{token}/attach"));

    let body = body_string(get(&t.app, &location(&resp)));
    assert!(body.contains("Take Photo"));
    assert!(body.contains("Choose from Library"));
    assert!(body.contains("pothole.jpg"));
    assert!(body.contains("Select up to 5 items"));
}

#[test]
fn typed_fields_survive_a_trip_to_the_chooser() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    post_form(
        &t.app,
        &format!("/complaints/{token}"),
        "description=Cracked+barrier+on+ramp&contact_email=a%40b.co&consent=true&action=attach",
    );
    post_form(&t.app, &format!("/complaints/{token}/attach"), "source=cancel");

    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(body.contains("Cracked barrier on ramp"));
    assert!(body.contains("a@b.co"));
}

#[test]
fn library_pick_adds_attachments_and_they_are_uploaded() {
    let t = test_app(200);
    let token = open_form(&t.app, "1");
    t.picker.queue(PickerResponse::Picked(vec![
        asset("pothole.jpg", "image/jpeg", 2 * MIB),
        asset("crack.mov", "video/quicktime", 8 * MIB),
    ]));

    let resp = post_form(
        &t.app,
        &format!("/complaints/{token}/attach"),
        "source=library&item=pothole.jpg&item=crack.mov",
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), format!("/complaints/{token}"));

    assert_eq!(
        *t.picker.requests.lock().unwrap(),
        vec![PickerRequest::Library {
            selected: vec!["pothole.jpg".into(), "crack.mov".into()],
            selection_limit: 5,
        }]
    );

    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(body.contains("pothole.jpg"));
    assert!(body.contains("crack.mov"));
    assert!(body.contains("remove-1"));

    let resp = post_form(
        &t.app,
        &format!("/complaints/{token}"),
        "description=Large+pothole+near+exit+12&contact_email=&consent=true&action=submit",
    );
    assert_eq!(location(&resp), "/projects/1?notice=submitted");

    let sent = t.transport.sent.lock().unwrap();
    let parts = &sent[0].attachments;
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].file_name, "pothole.jpg");
    assert_eq!(parts[0].content_type, "image/jpeg");
    assert_eq!(parts[1].content_type, "video/quicktime");
}

#[test]
fn oversized_item_is_rejected_with_a_notice() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");
    t.picker.queue(PickerResponse::Picked(vec![
        asset("huge.mp4", "video/mp4", 15 * MIB),
        asset("small.png", "image/png", MIB),
    ]));

    post_form(
        &t.app,
        &format!("/complaints/{token}/attach"),
        "source=library&item=huge.mp4&item=small.png",
    );

    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(body.contains("File Too Large"));
    assert!(body.contains("Please select files smaller than 10MB"));
    assert!(!body.contains("huge.mp4"));
    assert!(body.contains("small.png"));
}

#[test]
fn unsupported_kind_is_rejected_with_a_notice() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");
    t.picker.queue(PickerResponse::Picked(vec![asset(
        "scan.gif",
        "image/gif",
        MIB,
    )]));

    post_form(&t.app, &format!("/complaints/{token}/attach"), "source=camera");

    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(body.contains("Invalid File Type"));
    assert!(!body.contains("scan.gif"));
}

#[test]
fn camera_failure_becomes_a_notice() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");
    t.picker.queue(PickerResponse::Failed {
        code: PickerErrorCode::CameraUnavailable,
        message: "Camera not available on this device".into(),
    });

    post_form(&t.app, &format!("/complaints/{token}/attach"), "source=camera");

    assert_eq!(*t.picker.requests.lock().unwrap(), vec![PickerRequest::Camera]);
    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(body.contains("Failed to select media: Camera not available on this device"));
}

#[test]
fn cancel_leaves_attachments_alone() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}/attach"), "source=cancel");

    assert_eq!(resp.status(), 303);
    assert!(t.picker.requests.lock().unwrap().is_empty());
    let body = body_string(get(&t.app, &format!("/complaints/{token}")));
    assert!(!body.contains("remove-0"));
}

#[test]
fn remove_drops_one_attachment_and_ignores_bad_indices() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");
    let form_uri = format!("/complaints/{token}");
    t.picker.queue(PickerResponse::Picked(vec![
        asset("first.jpg", "image/jpeg", MIB),
        asset("second.jpg", "image/jpeg", MIB),
    ]));
    post_form(
        &t.app,
        &format!("{form_uri}/attach"),
        "source=library&item=first.jpg&item=second.jpg",
    );

    for action in ["remove-7", "remove--1", "remove-x"] {
        let resp = post_form(&t.app, &form_uri, &format!("action={action}"));
        assert_eq!(resp.status(), 303);
    }
    let body = body_string(get(&t.app, &form_uri));
    assert!(body.contains("first.jpg") && body.contains("second.jpg"));

    let resp = post_form(&t.app, &form_uri, "action=remove-0");
    assert_eq!(location(&resp), form_uri);

    let body = body_string(get(&t.app, &form_uri));
    assert!(!body.contains("first.jpg"));
    assert!(body.contains("second.jpg"));
}

#[test]
fn unknown_source_is_a_bad_request() {
    let t = test_app(201);
    let token = open_form(&t.app, "1");

    let resp = post_form(&t.app, &format!("/complaints/{token}/attach"), "source=drone");

    assert_eq!(resp.status(), 400);
}
