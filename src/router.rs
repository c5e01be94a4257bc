use crate::app::App;
use crate::domain::{Notice, SubmissionOutcome};
use crate::errors::{ResultResp, ServerError};
use crate::media::{CaptureChoice, PickerErrorCode, PickerResponse, LIBRARY_SELECTION_LIMIT};
use crate::responses::{html_response, html_response_with_status, redirect_to};
use crate::routes::{
    DetailNotice, FormSessionParams, OpenComplaintParams, ProjectDetailParams, ProjectListParams,
    Route,
};
use crate::session::FormSession;
use crate::submission::SubmitResult;
use crate::templates::pages;
use astra::Request;
use std::io::Read;
use std::time::Duration;
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 64 * 1024;
const PICKER_WAIT: Duration = Duration::from_secs(60);

type FormFields = Vec<(String, String)>;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    tracing::debug!(%method, %path, "request");

    let route = Route::parse(&method, &path, query.as_deref()).ok_or(ServerError::NotFound)?;

    match route {
        Route::ProjectList(p) => project_list(app, &p),
        Route::ProjectDetail(p) => project_detail(app, &p),
        Route::OpenComplaint(p) => open_complaint(app, &p),
        Route::ComplaintForm(s) => complaint_form(app, &s),
        Route::ComplaintAction(s) => {
            let fields = read_form(&mut req)?;
            complaint_action(app, &s, &fields)
        }
        Route::AttachChooser(s) => attach_chooser(app, &s),
        Route::AttachPick(s) => {
            let fields = read_form(&mut req)?;
            attach_pick(app, &s, &fields)
        }
    }
}

fn project_list(app: &App, params: &ProjectListParams) -> ResultResp {
    let vm = pages::ProjectListVm {
        query: &params.query,
        projects: app.directory.filter(&params.query),
        load_error: app.directory.load_error(),
    };
    html_response(pages::project_list_page(&vm))
}

fn project_detail(app: &App, params: &ProjectDetailParams) -> ResultResp {
    let project = app
        .directory
        .get(&params.project_id)
        .ok_or(ServerError::NotFound)?;

    let notice = params.notice.map(|n| match n {
        DetailNotice::Submitted => Notice::new(
            "Success",
            "Your complaint has been submitted successfully.",
        ),
    });

    html_response(pages::project_detail_page(project, notice.as_ref()))
}

fn open_complaint(app: &App, params: &OpenComplaintParams) -> ResultResp {
    if app.directory.get(&params.project_id).is_none() {
        return Err(ServerError::NotFound);
    }
    let token = app.sessions.open(&params.project_id)?;
    redirect_to(&Route::complaint_form(&token))
}

fn complaint_form(app: &App, params: &FormSessionParams) -> ResultResp {
    let handle = app.sessions.get(&params.token)?.ok_or(ServerError::NotFound)?;
    let mut session = handle.lock()?;
    render_form(app, &params.token, &mut session, 200)
}

fn complaint_action(app: &App, params: &FormSessionParams, fields: &FormFields) -> ResultResp {
    let token = params.token.as_str();
    let handle = app.sessions.get(token)?.ok_or(ServerError::NotFound)?;
    let mut session = handle.lock()?;

    apply_form_fields(&mut session, fields);

    let action = field(fields, "action").unwrap_or("submit");
    match action {
        "submit" => {
            let result = app.coordinator.submit(
                &session.project_id,
                &session.form,
                session.attachments.attachments(),
                &session.busy,
            );

            match result {
                SubmitResult::Invalid(errors) => {
                    session.errors = errors;
                    render_form(app, token, &mut session, 422)
                }
                SubmitResult::Sent(SubmissionOutcome::Success) => {
                    let project_id = session.project_id.clone();
                    drop(session);
                    app.sessions.close(token)?;
                    redirect_to(&Route::project_detail(
                        &project_id,
                        Some(DetailNotice::Submitted),
                    ))
                }
                SubmitResult::Sent(SubmissionOutcome::Failure { reason }) => {
                    session.errors = Default::default();
                    session.push_notice(Notice::new("Submission Failed", reason));
                    redirect_to(&Route::complaint_form(token))
                }
            }
        }
        "attach" => redirect_to(&Route::attach(token)),
        "back" => {
            let project_id = session.project_id.clone();
            drop(session);
            app.sessions.close(token)?;
            redirect_to(&Route::project_detail(&project_id, None))
        }
        other => {
            let Some(index) = other.strip_prefix("remove-") else {
                return Err(ServerError::BadRequest(format!("unknown action {other:?}")));
            };
            // Negative or garbage indices are a no-op, like out-of-range ones.
            if let Ok(index) = index.parse::<usize>() {
                session.attachments.remove(index);
            }
            redirect_to(&Route::complaint_form(token))
        }
    }
}

fn attach_chooser(app: &App, params: &FormSessionParams) -> ResultResp {
    let handle = app.sessions.get(&params.token)?.ok_or(ServerError::NotFound)?;
    drop(handle.lock()?);

    let items = app.picker.library_items();
    let vm = pages::AttachVm {
        action: Route::AttachPick(params.clone()).href(),
        back_href: Route::complaint_form(&params.token).href(),
        library_items: &items,
        selection_limit: LIBRARY_SELECTION_LIMIT,
    };
    html_response(pages::attach_page(&vm))
}

fn attach_pick(app: &App, params: &FormSessionParams, fields: &FormFields) -> ResultResp {
    let handle = app.sessions.get(&params.token)?.ok_or(ServerError::NotFound)?;
    let mut session = handle.lock()?;

    let choice = match field(fields, "source") {
        Some("camera") => CaptureChoice::Camera,
        Some("library") => CaptureChoice::Library {
            selected: fields
                .iter()
                .filter(|(k, _)| k == "item")
                .map(|(_, v)| v.clone())
                .collect(),
        },
        Some("cancel") | None => CaptureChoice::Cancel,
        Some(other) => {
            return Err(ServerError::BadRequest(format!(
                "unknown capture source {other:?}"
            )))
        }
    };

    let rx = session
        .attachments
        .request_capture(app.picker.as_ref(), choice);
    let response = rx.recv_timeout(PICKER_WAIT).unwrap_or_else(|e| {
        tracing::error!(error = %e, "media picker never answered");
        PickerResponse::Failed {
            code: PickerErrorCode::Others,
            message: "The media picker did not respond".into(),
        }
    });

    for rejected in session.attachments.on_media_selected(response) {
        session.push_notice(rejected.to_notice());
    }

    redirect_to(&Route::complaint_form(&params.token))
}

fn render_form(app: &App, token: &str, session: &mut FormSession, status: u16) -> ResultResp {
    let notices = session.take_notices();
    let vm = pages::ComplaintFormVm {
        action: Route::ComplaintAction(FormSessionParams {
            token: token.to_string(),
        })
        .href(),
        back_href: Route::project_detail(&session.project_id, None).href(),
        project_name: app
            .directory
            .get(&session.project_id)
            .map(|p| p.name.as_str()),
        form: &session.form,
        errors: &session.errors,
        attachments: session.attachments.attachments(),
        notices,
    };
    html_response_with_status(status, pages::complaint_form_page(&vm))
}

/// A full form post carries `description`; action-only posts leave the
/// typed values alone.
fn apply_form_fields(session: &mut FormSession, fields: &FormFields) {
    let Some(description) = field(fields, "description") else {
        return;
    };
    session.form.description = description.to_string();
    session.form.contact_email = field(fields, "contact_email").unwrap_or("").to_string();
    session.form.consent_given = field(fields, "consent") == Some("true");
}

fn field<'a>(fields: &'a FormFields, key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn read_form(req: &mut Request) -> Result<FormFields, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form too large".into()));
    }

    Ok(form_urlencoded::parse(&raw).into_owned().collect())
}
