// src/tests/utils.rs

use crate::api::ApiError;
use crate::app::App;
use crate::directory::{PlaceholderProjects, ProjectDirectory};
use crate::media::{MediaPicker, PickedAsset, PickerRequest, PickerResponse};
use crate::router::handle;
use crate::submission::{ComplaintRequest, ComplaintTransport, SubmissionCoordinator};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a fixed status.
pub struct FakeTransport {
    pub status: u16,
    pub sent: Mutex<Vec<ComplaintRequest>>,
}

impl ComplaintTransport for Arc<FakeTransport> {
    fn send(&self, request: &ComplaintRequest) -> Result<u16, ApiError> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(self.status)
    }
}

/// Answers every launch with the next queued response, or `Cancelled`.
#[derive(Default)]
pub struct FakePicker {
    pub responses: Mutex<Vec<PickerResponse>>,
    pub requests: Mutex<Vec<PickerRequest>>,
}

impl FakePicker {
    pub fn queue(&self, response: PickerResponse) {
        self.responses.lock().unwrap().push(response);
    }
}

impl MediaPicker for Arc<FakePicker> {
    fn launch(&self, request: PickerRequest) -> Receiver<PickerResponse> {
        self.requests.lock().unwrap().push(request);
        let next = {
            let mut queued = self.responses.lock().unwrap();
            if queued.is_empty() {
                PickerResponse::Cancelled
            } else {
                queued.remove(0)
            }
        };
        let (tx, rx) = mpsc::channel();
        tx.send(next).unwrap();
        rx
    }

    fn library_items(&self) -> Vec<String> {
        vec!["pothole.jpg".into(), "crack.mov".into()]
    }
}

pub struct TestApp {
    pub app: App,
    pub transport: Arc<FakeTransport>,
    pub picker: Arc<FakePicker>,
}

/// App over the sample projects that sends through `transport`.
pub fn app_with_transport(transport: Box<dyn ComplaintTransport>) -> App {
    App::new(
        ProjectDirectory::load(&PlaceholderProjects),
        SubmissionCoordinator::new(transport),
        Box::new(Arc::new(FakePicker::default())),
    )
}

/// App over the sample projects whose endpoint answers `status`.
pub fn test_app(status: u16) -> TestApp {
    let transport = Arc::new(FakeTransport {
        status,
        sent: Mutex::new(Vec::new()),
    });
    let picker = Arc::new(FakePicker::default());

    let app = App::new(
        ProjectDirectory::load(&PlaceholderProjects),
        SubmissionCoordinator::new(Box::new(transport.clone())),
        Box::new(picker.clone()),
    );

    TestApp {
        app,
        transport,
        picker,
    }
}

pub fn asset(name: &str, kind: &str, size: u64) -> PickedAsset {
    PickedAsset {
        uri: format!("file:///media/{name}"),
        kind: Some(kind.into()),
        file_size: Some(size),
        file_name: Some(name.into()),
    }
}

pub fn get(app: &App, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app).unwrap_or_else(crate::templates::html_error_response)
}

pub fn post_form(app: &App, uri: &str, body: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    handle(req, app).unwrap_or_else(crate::templates::html_error_response)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Opens a complaint form for `project_id` and returns its token.
pub fn open_form(app: &App, project_id: &str) -> String {
    let resp = post_form(app, &format!("/projects/{project_id}/complaints"), "");
    assert_eq!(resp.status(), 303);
    location(&resp)
        .strip_prefix("/complaints/")
        .expect("redirects to the form")
        .to_string()
}
