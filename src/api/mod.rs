//! REST API gateway module for the CodeHive backend.
//!
//! This module provides the `ApiClient` for all backend operations:
//! forum discussions and comments, blogs, code snippets, news, tags,
//! and the admin management endpoints.
//!
//! Authentication is a bearer token sourced from the session store, with a
//! CSRF token echoed from the backend's cookie on every request.

pub mod client;
pub mod error;

pub use client::{ApiClient, SessionExpiredHandler};
pub use error::ApiError;
