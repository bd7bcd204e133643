use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response
pub fn html_error_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::InternalError => 500,
    };

    if status >= 500 {
        tracing::error!(%status, error = %err, "request failed");
    } else {
        tracing::warn!(%status, error = %err, "request rejected");
    }

    let message = match err {
        ServerError::BadRequest(msg) => msg,
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
