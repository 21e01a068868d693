use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::write_resumes::WriteResumeError;
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::resume::application::domain::resume_form::{
    ResumeFieldsUpdate, ResumeForm, ResumeFormError,
};
use crate::shared::editor_state::EditorState;

//
// ──────────────────────────────────────────────────────────
// Commands / View
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ResumeEditorCommand {
    OpenNew,
    OpenExisting { id: String },
    Close,
    SetFields { fields: ResumeFieldsUpdate },
    AttachFile { url: String, file_name: String },
    Save,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeEditorView {
    #[serde(flatten)]
    pub state: EditorState<ResumeForm>,
    pub can_save: bool,
    /// Message of the issue currently blocking a save, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_blocked_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<String>,
}

impl ResumeEditorView {
    pub fn of(state: &EditorState<ResumeForm>) -> Self {
        let blocked = state.form().and_then(|form| form.validate().err());
        Self {
            can_save: state.is_open() && blocked.is_none(),
            save_blocked_by: blocked.map(|e| e.to_string()),
            state: state.clone(),
            saved_id: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResumeEditorError {
    #[error("No resume is being edited")]
    NotEditing,

    #[error("Resume not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] ResumeFormError),

    #[error(transparent)]
    Save(#[from] WriteResumeError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResumeEditorUseCase: Send + Sync {
    async fn current(&self, session: &AdminSession) -> ResumeEditorView;

    async fn apply(
        &self,
        session: &AdminSession,
        command: ResumeEditorCommand,
    ) -> Result<ResumeEditorView, ResumeEditorError>;
}
