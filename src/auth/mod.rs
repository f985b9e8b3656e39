//! Authentication module for session state and authorization decisions.
//!
//! This module provides:
//! - `SessionStore`: durable token/user session with an
//!   initialize/login/logout/current lifecycle
//! - `Role` / `Capability`: the single place role-based access is decided
//!
//! Sessions persist across restarts as a token/user pair; no server-side
//! token validation happens at startup.

pub mod error;
pub mod roles;
pub mod session;

pub use error::AuthError;
pub use roles::{Capability, Role};
pub use session::{Session, SessionSnapshot, SessionStore};
