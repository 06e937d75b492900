use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every catalog endpoint: a machine-readable name
/// ("NotFound", "PartialNotFound", "ValidationError", "InternalError") and
/// a human-readable message.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error to the HTTP status and error body the transport
/// answers with. Implemented per error type next to its routes.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
