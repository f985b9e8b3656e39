//! Client library for the CodeHive community platform.
//!
//! CodeHive is a community backend (forum discussions, blogs, code snippets,
//! news, admin management) behind a uniform REST API. This crate is the
//! client core a front end builds on:
//!
//! - [`auth::SessionStore`]: who is logged in, durable across restarts
//! - [`api::ApiClient`]: typed operations over every backend endpoint, with
//!   credentials attached centrally and 401 handled globally
//! - [`models`]: wire shapes for every resource
//!
//! The crate transports domain records; it does not cache, retry, or reorder
//! requests. Callers needing a consistent view await one operation before
//! issuing a dependent one.
//!
//! ```no_run
//! use std::sync::Arc;
//! use codehive_client::{ApiClient, Config, SessionStore};
//! use codehive_client::models::LoginCredentials;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let store = Arc::new(SessionStore::open(Config::session_dir()?));
//! store.initialize()?;
//!
//! let api = ApiClient::new(&config, Arc::clone(&store))?;
//! store
//!     .login(&api, &LoginCredentials::new("alice", "secret"))
//!     .await?;
//! let discussions = api.get_discussions(1).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, SessionExpiredHandler};
pub use auth::{AuthError, Capability, Role, SessionSnapshot, SessionStore};
pub use config::Config;
