// src/routes.rs
//
// Typed navigation: every view has its own parameter struct, and links are
// built from the same types the router parses into.

use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListParams {
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailNotice {
    Submitted,
}

impl DetailNotice {
    fn as_param(self) -> &'static str {
        match self {
            DetailNotice::Submitted => "submitted",
        }
    }

    fn from_param(s: &str) -> Option<Self> {
        match s {
            "submitted" => Some(DetailNotice::Submitted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailParams {
    pub project_id: String,
    pub notice: Option<DetailNotice>,
}

/// Opening a complaint form only needs the project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenComplaintParams {
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSessionParams {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProjectList(ProjectListParams),
    ProjectDetail(ProjectDetailParams),
    OpenComplaint(OpenComplaintParams),
    ComplaintForm(FormSessionParams),
    ComplaintAction(FormSessionParams),
    AttachChooser(FormSessionParams),
    AttachPick(FormSessionParams),
}

impl Route {
    pub fn parse(method: &str, path: &str, query: Option<&str>) -> Option<Route> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match (method, segments.as_slice()) {
            ("GET", []) | ("GET", ["projects"]) => Route::ProjectList(ProjectListParams {
                query: query_param(query, "q").unwrap_or_default(),
            }),
            ("GET", ["projects", id]) => Route::ProjectDetail(ProjectDetailParams {
                project_id: decode_segment(id)?,
                notice: query_param(query, "notice")
                    .as_deref()
                    .and_then(DetailNotice::from_param),
            }),
            ("POST", ["projects", id, "complaints"]) => {
                Route::OpenComplaint(OpenComplaintParams {
                    project_id: decode_segment(id)?,
                })
            }
            ("GET", ["complaints", token]) => Route::ComplaintForm(session(token)?),
            ("POST", ["complaints", token]) => Route::ComplaintAction(session(token)?),
            ("GET", ["complaints", token, "attach"]) => Route::AttachChooser(session(token)?),
            ("POST", ["complaints", token, "attach"]) => Route::AttachPick(session(token)?),
            _ => return None,
        };

        Some(route)
    }

    /// Relative URL for this view.
    pub fn href(&self) -> String {
        match self {
            Route::ProjectList(p) if p.query.is_empty() => "/projects".to_string(),
            Route::ProjectList(p) => {
                let q: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("q", &p.query)
                    .finish();
                format!("/projects?{q}")
            }
            Route::ProjectDetail(p) => {
                let base = format!("/projects/{}", encode_segment(&p.project_id));
                match p.notice {
                    Some(n) => format!("{base}?notice={}", n.as_param()),
                    None => base,
                }
            }
            Route::OpenComplaint(p) => {
                format!("/projects/{}/complaints", encode_segment(&p.project_id))
            }
            Route::ComplaintForm(s) | Route::ComplaintAction(s) => {
                format!("/complaints/{}", s.token)
            }
            Route::AttachChooser(s) | Route::AttachPick(s) => {
                format!("/complaints/{}/attach", s.token)
            }
        }
    }

    pub fn project_list() -> Self {
        Route::ProjectList(ProjectListParams {
            query: String::new(),
        })
    }

    pub fn project_detail(project_id: &str, notice: Option<DetailNotice>) -> Self {
        Route::ProjectDetail(ProjectDetailParams {
            project_id: project_id.to_string(),
            notice,
        })
    }

    pub fn open_complaint(project_id: &str) -> Self {
        Route::OpenComplaint(OpenComplaintParams {
            project_id: project_id.to_string(),
        })
    }

    pub fn complaint_form(token: &str) -> Self {
        Route::ComplaintForm(FormSessionParams {
            token: token.to_string(),
        })
    }

    pub fn attach(token: &str) -> Self {
        Route::AttachChooser(FormSessionParams {
            token: token.to_string(),
        })
    }
}

fn session(token: &str) -> Option<FormSessionParams> {
    crate::session::token::looks_like_token(token).then(|| FormSessionParams {
        token: token.to_string(),
    })
}

fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn encode_segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

fn decode_segment(seg: &str) -> Option<String> {
    form_urlencoded::parse(seg.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .filter(|s| !s.is_empty())
}
