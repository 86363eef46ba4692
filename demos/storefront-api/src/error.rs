use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// A JSON body paired with the HTTP status it should be sent with.
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> Reply<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
