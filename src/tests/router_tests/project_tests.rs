// src/tests/router_tests/project_tests.rs

use crate::tests::utils::{body_string, get, location, post_form, test_app};

#[test]
fn list_shows_every_project() {
    let t = test_app(201);

    let resp = get(&t.app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Highway 401 Expansion"));
    assert!(body.contains("Downtown Bridge Repair"));
    assert!(body.contains("$25,000,000.00"));
    assert!(body.contains("In Progress"));
}

#[test]
fn search_filters_by_location() {
    let t = test_app(201);

    let body = body_string(get(&t.app, "/projects?q=vancouver"));

    assert!(body.contains("Downtown Bridge Repair"));
    assert!(!body.contains("Highway 401 Expansion"));
}

#[test]
fn search_without_matches_says_so() {
    let t = test_app(201);

    let body = body_string(get(&t.app, "/projects?q=montreal"));

    assert!(body.contains("No projects found matching your search"));
}

#[test]
fn detail_renders_project_and_contractor() {
    let t = test_app(201);

    let resp = get(&t.app, "/projects/2");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Downtown Bridge Repair"));
    assert!(body.contains("$15,000,000.00"));
    assert!(body.contains("2024-02-20"));
    assert!(body.contains("mailto:projects@xyzinfra.com"));
    assert!(!body.contains("submitted successfully"));
}

#[test]
fn detail_shows_submitted_notice_once_asked() {
    let t = test_app(201);

    let body = body_string(get(&t.app, "/projects/1?notice=submitted"));

    assert!(body.contains("Your complaint has been submitted successfully."));
}

#[test]
fn unknown_project_is_not_found() {
    let t = test_app(201);

    assert_eq!(get(&t.app, "/projects/99").status(), 404);
    assert_eq!(post_form(&t.app, "/projects/99/complaints", "").status(), 404);
    assert_eq!(t.app.sessions.len(), 0);
}

#[test]
fn unknown_path_is_not_found() {
    let t = test_app(201);

    assert_eq!(get(&t.app, "/nowhere/at/all").status(), 404);
}

#[test]
fn opening_a_complaint_redirects_to_a_fresh_form() {
    let t = test_app(201);

    let resp = post_form(&t.app, "/projects/1/complaints", "");
    assert_eq!(resp.status(), 303);

    let loc = location(&resp);
    assert!(loc.starts_with("/complaints/"));

    let body = body_string(get(&t.app, &loc));
    assert!(body.contains("Submit Complaint"));
    assert!(body.contains("Highway 401 Expansion"));
}
