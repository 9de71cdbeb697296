//! Per-session state for the web form.
//!
//! Each browser session is keyed by a UUID carried in a hidden form field.
//! State lives in memory for the process lifetime; nothing is persisted and
//! sessions are never shared.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Mutable state of one user session across form interactions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current pseudocode text (editable by the user).
    pub pseudocode: String,
    /// Prose the model emitted before the pseudocode fence, if any.
    pub pseudocode_prefix: Option<String>,
    /// Prose the model emitted after the pseudocode fence, if any.
    pub pseudocode_suffix: Option<String>,
    /// Current generated code.
    pub code: String,
    /// Name of the last uploaded image.
    pub image_name: Option<String>,
    /// User-facing warning (e.g. neither input supplied).
    pub warning: Option<String>,
}

/// In-memory store of all sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a session by id, or an empty one if it does not exist yet.
    pub async fn get(&self, id: Uuid) -> Session {
        self.inner.read().await.get(&id).cloned().unwrap_or_default()
    }

    /// Store the session, replacing any previous state for that id.
    pub async fn put(&self, id: Uuid, session: Session) {
        self.inner.write().await.insert(id, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_session_is_empty() {
        let store = SessionStore::new();
        let session = store.get(Uuid::new_v4()).await;
        assert!(session.pseudocode.is_empty());
        assert!(session.code.is_empty());
        assert!(session.warning.is_none());
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        store
            .put(
                id,
                Session {
                    pseudocode: "BEGIN".into(),
                    code: "print(1)".into(),
                    ..Default::default()
                },
            )
            .await;
        let session = store.get(id).await;
        assert_eq!(session.pseudocode, "BEGIN");
        assert_eq!(session.code, "print(1)");
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store
            .put(
                a,
                Session {
                    code: "a".into(),
                    ..Default::default()
                },
            )
            .await;
        assert!(store.get(b).await.code.is_empty());
    }
}
