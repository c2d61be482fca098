//! Result helper extensions for HTTP handlers.

use std::{borrow::Cow, fmt::Display};

use tracing::debug;

use crate::responses::ApiError;

/// Map any error to a logged error response.
pub(crate) trait ResultExt<T> {
    /// 400 with the given plain-text message, logged at debug level.
    fn or_400(self, message: impl Into<Cow<'static, str>>) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, message: impl Into<Cow<'static, str>>) -> Result<T, ApiError> {
        self.map_err(|error| {
            let message = message.into();

            debug!("{message}: {error}");

            ApiError::bad_request(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_400_keeps_message() {
        let result: Result<(), ApiError> = "abc".parse::<i64>().map(drop).or_400("invalid id");

        assert_eq!(result, Err(ApiError::bad_request("invalid id")));
    }
}
