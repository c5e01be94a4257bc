use crate::domain::Notice;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn detail_row(label: &str, value: &str) -> Markup {
    html! {
        div class="row" {
            span class="label" { (label) }
            span class="value" { (value) }
        }
    }
}

/// One-time alert box. `is_error` switches to the red variant.
pub fn notice_box(notice: &Notice, is_error: bool) -> Markup {
    html! {
        div class=(if is_error { "notice error" } else { "notice" }) role="alert" {
            strong { (notice.title) }
            p { (notice.message) }
        }
    }
}

pub fn field_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            p class="error-text" { (msg) }
        }
    }
}
