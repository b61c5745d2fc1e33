use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::directory::OfficerDirectory;
use crate::models::{Officer, SessionRecord};

pub const SESSION_PATH_ENV: &str = "YARA_SESSION_PATH";
pub const DEFAULT_SESSION_PATH: &str = ".yara-session.json";

/// Demo credential; every officer account shares it.
const DEMO_PASSWORD: &str = "password123";
const SIGNUP_ROLE: &str = "Tourism Safety Officer";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("an officer with this email already exists")]
    EmailTaken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated(Officer),
}

/// Where the authenticated officer of `restore_or_default` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    Persisted,
    AutoSelected,
    Unavailable,
}

/// File-backed load/save/clear for the current officer, kept apart from
/// the auth flow so the storage location is a wiring decision.
pub struct SessionRepository {
    path: PathBuf,
}

impl SessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        let path =
            std::env::var(SESSION_PATH_ENV).unwrap_or_else(|_| DEFAULT_SESSION_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable session file degrades to "no session".
    pub fn load(&self) -> Option<Officer> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => Some(record.officer),
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "discarding unreadable session file");
                None
            }
        }
    }

    pub fn save(&self, officer: &Officer) -> anyhow::Result<()> {
        let record = SessionRecord {
            officer: officer.clone(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&record)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write session file {}", self.path.display()))
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("failed to remove session file {}", self.path.display())
            }),
        }
    }
}

/// Mock authentication over an injected officer store. The network a real
/// deployment would talk to is simulated with a fixed latency.
pub struct AuthService<D: OfficerDirectory> {
    directory: D,
    repository: SessionRepository,
    latency: Duration,
    state: SessionState,
}

impl<D: OfficerDirectory> AuthService<D> {
    pub fn new(directory: D, repository: SessionRepository, latency: Duration) -> Self {
        Self {
            directory,
            repository,
            latency,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_officer(&self) -> Option<&Officer> {
        match &self.state {
            SessionState::Authenticated(officer) => Some(officer),
            _ => None,
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Startup path: restore the persisted session, or fall back to the
    /// first listed officer and persist that. The fallback is a demo
    /// convenience, not a security boundary.
    pub fn restore_or_default(&mut self) -> anyhow::Result<SessionOrigin> {
        if let Some(officer) = self.repository.load() {
            tracing::debug!(email = %officer.email, "restored persisted session");
            self.state = SessionState::Authenticated(officer);
            return Ok(SessionOrigin::Persisted);
        }
        let Some(officer) = self.directory.list().first().cloned() else {
            return Ok(SessionOrigin::Unavailable);
        };
        tracing::debug!(email = %officer.email, "no persisted session, auto-selecting default officer");
        self.repository.save(&officer)?;
        self.state = SessionState::Authenticated(officer);
        Ok(SessionOrigin::AutoSelected)
    }

    /// Exact email lookup plus the shared demo password. Failure reports a
    /// single undifferentiated error and returns the state to anonymous.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Officer, AuthError> {
        self.state = SessionState::Authenticating;
        self.simulate_network().await;

        match self.directory.find_by_email(email) {
            Some(officer) if password == DEMO_PASSWORD => {
                self.persist(&officer);
                self.state = SessionState::Authenticated(officer.clone());
                Ok(officer)
            }
            _ => {
                self.state = SessionState::Anonymous;
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Registers a new officer account and signs it in. The password is
    /// accepted but never stored; the demo has no real secret.
    pub async fn signup(
        &mut self,
        name: &str,
        dept_id: &str,
        email: &str,
        _password: &str,
    ) -> Result<Officer, AuthError> {
        self.state = SessionState::Authenticating;
        self.simulate_network().await;

        if self.directory.find_by_email(email).is_some() {
            self.state = SessionState::Anonymous;
            return Err(AuthError::EmailTaken);
        }

        let officer = Officer {
            id: fresh_officer_id(),
            name: name.to_string(),
            email: email.to_string(),
            dept_id: dept_id.to_string(),
            role: SIGNUP_ROLE.to_string(),
        };
        self.directory.append(officer.clone());
        self.persist(&officer);
        self.state = SessionState::Authenticated(officer.clone());
        Ok(officer)
    }

    pub fn logout(&mut self) -> anyhow::Result<()> {
        self.repository.clear()?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Persistence is a convenience; a write failure downgrades the session
    /// to this process only rather than failing the auth flow.
    fn persist(&self, officer: &Officer) {
        if let Err(err) = self.repository.save(officer) {
            tracing::warn!(%err, "session will not survive this process");
        }
    }

    async fn simulate_network(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn fresh_officer_id() -> String {
    format!("OFF-{}", Uuid::new_v4().simple())
}
