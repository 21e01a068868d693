use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;

/// Admin editing session for one kind of record.
///
/// The staged form `F` is independent of the persisted record until a save
/// succeeds; opening a session while another is open replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditorState<F> {
    Closed,
    EditingNew { form: F },
    EditingExisting { id: String, form: F },
}

impl<F> Default for EditorState<F> {
    fn default() -> Self {
        EditorState::Closed
    }
}

impl<F> EditorState<F> {
    pub fn open_new(&mut self, form: F) {
        *self = EditorState::EditingNew { form };
    }

    pub fn open_existing(&mut self, id: String, form: F) {
        *self = EditorState::EditingExisting { id, form };
    }

    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }

    /// Called once the store accepted the staged form.
    pub fn commit_saved(&mut self) {
        self.close();
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            EditorState::EditingExisting { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            EditorState::Closed => None,
            EditorState::EditingNew { form } | EditorState::EditingExisting { form, .. } => {
                Some(form)
            }
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            EditorState::Closed => None,
            EditorState::EditingNew { form } | EditorState::EditingExisting { form, .. } => {
                Some(form)
            }
        }
    }
}

/// One [`EditorState`] per operator email, each behind its own lock.
///
/// The map lock is only held to look a session up. A save awaiting the store
/// keeps its operator's session locked and leaves the others free.
pub struct EditorSessions<F> {
    sessions: Mutex<HashMap<String, Arc<Mutex<EditorState<F>>>>>,
}

impl<F> Default for EditorSessions<F> {
    fn default() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl<F> EditorSessions<F> {
    pub async fn get(&self, email: &str) -> Option<Arc<Mutex<EditorState<F>>>> {
        self.sessions.lock().await.get(email).cloned()
    }

    /// Starts a closed session on first use.
    pub async fn get_or_default(&self, email: &str) -> Arc<Mutex<EditorState<F>>> {
        self.sessions
            .lock()
            .await
            .entry(email.to_string())
            .or_default()
            .clone()
    }
}
