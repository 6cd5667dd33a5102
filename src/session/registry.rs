use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    session::QuizSession,
};

pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;
pub const DEFAULT_MAX_LIVE_SESSIONS: usize = 10_000;

struct Entry {
    session: QuizSession,
    last_touched: DateTime<Utc>,
}

/// Live quiz sessions keyed by id. A session is only touched inside the
/// closure passed to `with_session` or `with_session_mut`, while the write
/// lock is held. Sessions idle for longer than `idle_ttl` are dropped, and at
/// most `max_sessions` are kept.
pub struct QuizSessionRegistry {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for QuizSessionRegistry {
    fn default() -> Self {
        Self::with_limits(
            Duration::minutes(DEFAULT_SESSION_IDLE_MINUTES),
            DEFAULT_MAX_LIVE_SESSIONS,
        )
    }
}

impl QuizSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Stores a new session. Expired sessions are swept first; when the
    /// registry is still full, completed sessions make room before the
    /// insert is refused.
    pub async fn insert(&self, session: QuizSession) -> AppResult<Uuid> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, now);

        if sessions.len() >= self.max_sessions {
            sessions.retain(|_, entry| !entry.session.is_completed());
        }
        if sessions.len() >= self.max_sessions {
            log::warn!("Refusing new quiz session: {} sessions live", sessions.len());
            return Err(AppError::BadRequest(
                "Too many active quiz sessions, please try again later".to_string(),
            ));
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Entry {
                session,
                last_touched: now,
            },
        );
        Ok(id)
    }

    pub async fn with_session<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&QuizSession) -> R,
    ) -> AppResult<R> {
        self.with_session_mut(id, |session| f(session)).await
    }

    pub async fn with_session_mut<R>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut QuizSession) -> R,
    ) -> AppResult<R> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions
            .get_mut(id)
            .filter(|entry| !self.is_expired(entry, now))
            .ok_or_else(|| not_found(id))?;
        entry.last_touched = now;
        Ok(f(&mut entry.session))
    }

    pub async fn remove(&self, id: &Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    /// Drops sessions idle past the TTL as of `now`; returns how many went.
    pub async fn evict_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions, now)
    }

    pub async fn evict_expired(&self) -> usize {
        self.evict_expired_at(Utc::now()).await
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn is_expired(&self, entry: &Entry, now: DateTime<Utc>) -> bool {
        now - entry.last_touched > self.idle_ttl
    }

    fn sweep(&self, sessions: &mut HashMap<Uuid, Entry>, now: DateTime<Utc>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::debug!("Evicted {} idle quiz sessions", evicted);
        }
        evicted
    }
}

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Quiz session '{}' not found", id))
}
