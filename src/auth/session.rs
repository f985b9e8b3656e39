use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::models::{LoginCredentials, SessionUser};

use super::{AuthError, Role};

/// Persisted bearer token entry
const TOKEN_FILE: &str = "token";

/// Persisted user record entry
const USER_FILE: &str = "user.json";

/// An established token/user pair. Either both halves exist or neither does;
/// the store never exposes one without the other.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Synchronous view of the current authentication state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
}

/// Single source of truth for "who is logged in", durable across restarts.
///
/// Construct one per application (or per test) over a storage directory,
/// call [`initialize`](Self::initialize) at startup, and share it with the
/// [`ApiClient`] so requests carry the bearer token.
pub struct SessionStore {
    dir: PathBuf,
    state: Mutex<Option<Session>>,
}

impl SessionStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            state: Mutex::new(None),
        }
    }

    /// Load any persisted session from disk.
    ///
    /// Establishes a session only when both the token and the user record are
    /// present and well-formed; a partial or corrupt pair is removed and the
    /// store starts unauthenticated. No network call is made and the token is
    /// not validated against the server.
    pub fn initialize(&self) -> Result<(), AuthError> {
        let token = self.read_entry(TOKEN_FILE)?;
        let user_raw = self.read_entry(USER_FILE)?;

        match (token, user_raw) {
            (Some(token), Some(raw)) if !token.is_empty() => {
                match serde_json::from_str::<SessionUser>(&raw) {
                    Ok(user) => {
                        debug!(username = %user.username, "restored persisted session");
                        *self.state() = Some(Session { token, user });
                    }
                    Err(error) => {
                        warn!(error = %error, "discarding corrupt persisted session");
                        self.remove_persisted()?;
                    }
                }
            }
            (None, None) => {
                debug!("no persisted session");
            }
            _ => {
                warn!("discarding partial persisted session");
                self.remove_persisted()?;
            }
        }
        Ok(())
    }

    /// Authenticate against the backend and establish a session.
    ///
    /// The response must carry a non-empty token and a user with a
    /// recognized role; anything else fails with
    /// [`AuthError::InvalidSessionData`] and leaves the prior session
    /// untouched, in memory and on disk.
    pub async fn login(
        &self,
        api: &ApiClient,
        credentials: &LoginCredentials,
    ) -> Result<SessionUser, AuthError> {
        let response = api.login(credentials).await?;

        let role = response
            .user
            .role
            .as_deref()
            .and_then(Role::parse)
            .ok_or(AuthError::InvalidSessionData)?;
        let user = SessionUser {
            id: response.user.id,
            username: response.user.username,
            role,
        };

        self.establish(response.token, user.clone())?;
        Ok(user)
    }

    /// Persist a token/user pair and mark the session authenticated.
    ///
    /// Disk is written before memory, so a persistence failure leaves the
    /// in-memory state unchanged.
    pub fn establish(&self, token: String, user: SessionUser) -> Result<(), AuthError> {
        if token.is_empty() {
            return Err(AuthError::InvalidSessionData);
        }
        self.persist(&token, &user)?;
        *self.state() = Some(Session { token, user });
        Ok(())
    }

    /// Clear the session, in memory and on disk. No network call.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.remove_persisted()?;
        *self.state() = None;
        Ok(())
    }

    /// Same teardown as [`logout`](Self::logout); the name used by the
    /// gateway's 401 path.
    pub fn clear(&self) -> Result<(), AuthError> {
        self.logout()
    }

    /// Snapshot of the current authentication state.
    pub fn current(&self) -> SessionSnapshot {
        let state = self.state();
        SessionSnapshot {
            is_authenticated: state.is_some(),
            user: state.as_ref().map(|session| session.user.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_some()
    }

    /// Bearer token for header construction, if a session exists.
    pub fn token(&self) -> Option<String> {
        self.state().as_ref().map(|session| session.token.clone())
    }

    fn persist(&self, token: &str, user: &SessionUser) -> Result<(), AuthError> {
        fs::create_dir_all(&self.dir).map_err(AuthError::Storage)?;
        let encoded = serde_json::to_string_pretty(user).map_err(io::Error::other)?;
        // User first: a token on disk must always have a matching user.
        fs::write(self.dir.join(USER_FILE), encoded)?;
        fs::write(self.dir.join(TOKEN_FILE), token)?;
        Ok(())
    }

    fn remove_persisted(&self) -> Result<(), AuthError> {
        // Token first, the reverse of persist.
        for name in [TOKEN_FILE, USER_FILE] {
            match fs::remove_file(self.dir.join(name)) {
                Ok(()) => {}
                Err(error) if error.kind() == ErrorKind::NotFound => {}
                Err(error) => return Err(error.into()),
            }
        }
        Ok(())
    }

    fn read_entry(&self, name: &str) -> Result<Option<String>, AuthError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn state(&self) -> MutexGuard<'_, Option<Session>> {
        // Recover rather than panic if a test thread poisoned the lock.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
