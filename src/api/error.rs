use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// 401. Handled globally by the gateway (session teardown) before the
    /// rejection reaches the caller.
    #[error("unauthorized - session expired or missing")]
    Unauthorized,

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// 4xx other than 401/403/404. Displays the backend-provided message so
    /// callers can surface it as-is.
    #[error("{message}")]
    BadRequest { status: u16, message: String },

    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Back off to a char boundary so multibyte bodies slice cleanly.
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    /// Pull the human-readable message out of a JSON error body when the
    /// backend provides one; otherwise fall back to the raw body.
    fn extract_message(body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for key in ["message", "detail", "error"] {
                if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                    return message.to_string();
                }
            }
        }
        Self::truncate_body(body)
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(message),
            404 => ApiError::NotFound(message),
            status @ 400..=499 => ApiError::BadRequest { status, message },
            status @ 500..=599 => ApiError::ServerError { status, message },
            _ => ApiError::InvalidResponse(format!("status {}: {}", status, message)),
        }
    }

    /// HTTP status code, when this error originated from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::AccessDenied(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest { status, .. } | ApiError::ServerError { status, .. } => {
                Some(*status)
            }
            ApiError::Network(error) => error.status().map(|s| s.as_u16()),
            ApiError::InvalidRequest(_) | ApiError::InvalidResponse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_backend_message_extracted() {
        let error = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Invalid credentials"}"#,
        );
        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_detail_field_extracted() {
        let error = ApiError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"detail":"Not found."}"#,
        );
        assert_eq!(error.to_string(), "resource not found: Not found.");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_non_json_body_passes_through() {
        let error = ApiError::from_status(StatusCode::BAD_GATEWAY, "Bad Gateway");
        assert_eq!(error.to_string(), "server error (502): Bad Gateway");
        assert_eq!(error.status(), Some(502));
    }

    #[test]
    fn test_unauthorized_ignores_body() {
        let error = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"token expired"}"#,
        );
        assert!(matches!(error, ApiError::Unauthorized));
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_multibyte_body_truncated_at_char_boundary() {
        // 600 bytes of 3-byte chars puts the cut inside a character.
        let body = "€".repeat(200);
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = error.to_string();
        assert!(message.contains("truncated, 600 total bytes"));
        assert!(!message.contains('\u{fffd}'));
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(2000);
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = error.to_string();
        assert!(message.contains("truncated, 2000 total bytes"));
        assert!(message.len() < body.len());
    }
}
