use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::write_projects::WriteProjectError;
use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::entities::MediaItem;
use crate::modules::project::application::domain::project_form::{
    ProjectFieldsUpdate, ProjectForm, ProjectFormError,
};
use crate::shared::editor_state::EditorState;

//
// ──────────────────────────────────────────────────────────
// Commands / View
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ProjectEditorCommand {
    OpenNew,
    OpenExisting { id: String },
    Close,
    SetFields { fields: ProjectFieldsUpdate },
    AppendMedia { items: Vec<MediaItem> },
    RemoveMedia { index: usize },
    MoveMediaLeft { index: usize },
    MoveMediaRight { index: usize },
    SetThumbnail { index: usize },
    Save,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEditorView {
    #[serde(flatten)]
    pub state: EditorState<ProjectForm>,
    pub can_save: bool,
    /// Id of the project written by a successful `save`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_id: Option<String>,
}

impl ProjectEditorView {
    pub fn of(state: &EditorState<ProjectForm>) -> Self {
        Self {
            can_save: state.form().is_some_and(ProjectForm::can_save),
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
pub enum ProjectEditorError {
    #[error("No project is being edited")]
    NotEditing,

    #[error("Project not found")]
    NotFound,

    #[error(transparent)]
    Form(#[from] ProjectFormError),

    #[error(transparent)]
    Save(#[from] WriteProjectError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Staged editing of one project per operator session.
#[async_trait]
pub trait ProjectEditorUseCase: Send + Sync {
    async fn current(&self, session: &AdminSession) -> ProjectEditorView;

    async fn apply(
        &self,
        session: &AdminSession,
        command: ProjectEditorCommand,
    ) -> Result<ProjectEditorView, ProjectEditorError>;
}
