// src/session/store.rs

use crate::domain::{ComplaintForm, Notice, ValidationResult};
use crate::errors::ServerError;
use crate::media::AttachmentManager;
use crate::session::token::generate_token_default;
use crate::submission::BusyFlag;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, TryLockError};
use std::time::{Duration, Instant};

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Everything one open complaint form owns.
#[derive(Debug)]
pub struct FormSession {
    pub project_id: String,
    pub form: ComplaintForm,
    pub attachments: AttachmentManager,
    /// Result of the last validation pass, shown next to the fields.
    pub errors: ValidationResult,
    pub busy: BusyFlag,
    notices: Vec<Notice>,
}

impl FormSession {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            form: ComplaintForm::default(),
            attachments: AttachmentManager::new(),
            errors: ValidationResult::default(),
            busy: BusyFlag::default(),
            notices: Vec::new(),
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Notices are shown once; reading them clears them.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

/// Shared handle to one form. The busy flag sits outside the lock so a
/// refused request can tell a submission apart from any other holder.
#[derive(Clone)]
pub struct SessionHandle {
    form: Arc<Mutex<FormSession>>,
    busy: BusyFlag,
}

impl SessionHandle {
    fn new(project_id: &str) -> Self {
        let session = FormSession::new(project_id);
        let busy = session.busy.clone();
        Self {
            form: Arc::new(Mutex::new(session)),
            busy,
        }
    }

    /// Locks the form without waiting. A locked form is refused with 409
    /// rather than queued, which is what keeps a second submit out while
    /// the first is in flight.
    pub fn lock(&self) -> Result<MutexGuard<'_, FormSession>, ServerError> {
        match self.form.try_lock() {
            Ok(guard) => Ok(guard),
            Err(TryLockError::WouldBlock) if self.busy.is_busy() => Err(ServerError::Conflict(
                "Your complaint is already being submitted".into(),
            )),
            Err(TryLockError::WouldBlock) => Err(ServerError::Conflict(
                "This form is busy, please try again".into(),
            )),
            Err(TryLockError::Poisoned(_)) => Err(ServerError::InternalError),
        }
    }

    /// Blocking lock for tests that need to hold a form.
    #[cfg(test)]
    pub fn hold(&self) -> MutexGuard<'_, FormSession> {
        self.form.lock().unwrap()
    }
}

struct Entry {
    handle: SessionHandle,
    last_seen: Instant,
}

/// Open complaint forms keyed by token.
pub struct FormSessions {
    sessions: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
}

impl Default for FormSessions {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl FormSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Creates a fresh form for `project_id` and returns its token.
    /// Forms idle for longer than the TTL are dropped on the way.
    pub fn open(&self, project_id: &str) -> Result<String, ServerError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ServerError::InternalError)?;

        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, e| now.duration_since(e.last_seen) < self.ttl);
        if sessions.len() < before {
            tracing::debug!(purged = before - sessions.len(), "dropped idle complaint forms");
        }

        let token = generate_token_default();
        sessions.insert(
            token.clone(),
            Entry {
                handle: SessionHandle::new(project_id),
                last_seen: now,
            },
        );

        Ok(token)
    }

    pub fn get(&self, token: &str) -> Result<Option<SessionHandle>, ServerError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ServerError::InternalError)?;

        Ok(sessions.get_mut(token).map(|e| {
            e.last_seen = Instant::now();
            e.handle.clone()
        }))
    }

    pub fn close(&self, token: &str) -> Result<(), ServerError> {
        self.sessions
            .lock()
            .map_err(|_| ServerError::InternalError)?
            .remove(token);
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}
