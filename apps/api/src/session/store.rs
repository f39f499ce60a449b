use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::chat::ChatTurn;
use crate::models::profile::{Gender, Profile};
use crate::roadmap::StructuredRoadmap;

/// Shown when a non-female gender signs up.
pub const WOMEN_ONLY_MESSAGE: &str =
    "HerPath Mentor is designed specifically for girls and young women for this demo.";

/// Everything one visitor has entered or been told.
///
/// `Session::default()` is the initial state: signed out, empty profile,
/// empty histories.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub has_signed_up: bool,
    pub logged_in: bool,
    pub user_email: String,
    pub user_name: String,
    pub user_gender: Option<Gender>,
    /// Demo only; stored and compared as plain text.
    pub saved_password: String,
    pub profile: Profile,
    pub guidance_history: Vec<ChatTurn>,
    pub support_history: Vec<ChatTurn>,
    pub help_history: Vec<ChatTurn>,
    pub last_guidance_question: Option<String>,
    pub last_roadmap: Option<StructuredRoadmap>,
    /// Last time the store handed this session out or changed it.
    pub last_seen: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub password: String,
}

impl Session {
    /// One-time sign up. Copies the name into the profile.
    pub fn sign_up(&mut self, form: SignupForm) -> Result<(), AppError> {
        if self.has_signed_up {
            return Err(AppError::Validation(
                "This session already has an account. Please log in.".to_string(),
            ));
        }

        let gender = match form.gender {
            Some(g)
                if !form.email.trim().is_empty()
                    && !form.name.trim().is_empty()
                    && !form.password.is_empty() =>
            {
                g
            }
            _ => return Err(AppError::Validation("Please fill all fields.".to_string())),
        };

        if gender != Gender::Female {
            return Err(AppError::Validation(WOMEN_ONLY_MESSAGE.to_string()));
        }

        self.user_email = form.email;
        self.user_name = form.name.clone();
        self.user_gender = Some(gender);
        self.saved_password = form.password;
        self.profile.name = form.name;
        self.has_signed_up = true;
        Ok(())
    }

    /// Toy login: plain equality against the signed-up credentials.
    pub fn log_in(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        if !self.has_signed_up {
            return Err(AppError::Validation("Please sign up first.".to_string()));
        }
        if email != self.user_email || password != self.saved_password {
            return Err(AppError::Unauthorized(
                "Incorrect email or password. Please use the same details you used while signing up."
                    .to_string(),
            ));
        }
        self.logged_in = true;
        Ok(())
    }
}

/// Idle time after which a session is dropped on the next `create`.
pub const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 120;

/// Sessions keyed by id. Cloning shares the same map.
///
/// Handlers take a snapshot with `get`/`get_logged_in`, do any model calls
/// without holding the lock, then write back through `update`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::minutes(DEFAULT_IDLE_TIMEOUT_MINUTES))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Inserts a fresh session, first dropping every session idle for longer
    /// than the timeout.
    pub async fn create(&self) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.idle_timeout);
        let expired = before - sessions.len();
        if expired > 0 {
            debug!("Expired {expired} idle sessions");
        }

        sessions.insert(
            id,
            Session {
                last_seen: now,
                ..Session::default()
            },
        );
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.last_seen = Utc::now();
        Ok(session.clone())
    }

    pub async fn get_logged_in(&self, id: Uuid) -> Result<Session, AppError> {
        let session = self.get(id).await?;
        if !session.logged_in {
            return Err(AppError::Unauthorized("Please log in first.".to_string()));
        }
        Ok(session)
    }

    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Session) -> Result<R, AppError>,
    {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.last_seen = Utc::now();
        f(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
