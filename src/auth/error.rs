use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login response was missing a token or carried an unrecognized role.
    /// The prior session, if any, is left untouched.
    #[error("login response did not contain a valid session")]
    InvalidSessionData,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}
