//! Response bodies shared by every handler.

use std::borrow::Cow;

use salvo::{
    Response, Scribe,
    http::StatusCode,
    writing::{Json, Text},
};
use serde::{Deserialize, Serialize};

/// `{"message": ..., "data": ...}` wrapper around every JSON body.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub(crate) fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorBody {
    Text(Cow<'static, str>),
    Envelope(&'static str),
}

/// Error response with an exact body.
///
/// Most errors render as `text/plain`; a few are wrapped in an [`Envelope`]
/// with `null` data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn text(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            body: ErrorBody::Text(message.into()),
        }
    }

    pub(crate) fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::text(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::text(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn unauthorized() -> Self {
        Self::text(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub(crate) fn internal_server_error() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// 400 with an enveloped message and `null` data.
    pub(crate) fn bad_request_envelope(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::Envelope(message),
        }
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);

        match self.body {
            ErrorBody::Text(message) => res.render(Text::Plain(message.into_owned())),
            ErrorBody::Envelope(message) => res.render(Json(Envelope {
                message: message.to_string(),
                data: None::<()>,
            })),
        }
    }
}
