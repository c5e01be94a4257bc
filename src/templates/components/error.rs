use crate::errors::ServerError;
use crate::templates::mobile_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Conflict(msg) => msg.clone(),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    let page = mobile_layout(
        &format!("Error {status}"),
        Some("/"),
        html! {
            div class="card" {
                p { (message) }
                p { a href="/" { "← Back to projects" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
