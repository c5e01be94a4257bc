// responses/redirect.rs
use crate::errors::{ResultResp, ServerError};
use crate::routes::Route;
use astra::{Body, ResponseBuilder};

/// 303 so the browser follows up with a GET (post/redirect/get).
pub fn redirect_to(route: &Route) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", route.href())
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
