use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::project::application::domain::project_form::{ProjectForm, ProjectSubmission};
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectEditorCommand, ProjectEditorError, ProjectEditorUseCase, ProjectEditorView,
    ReadProjectsUseCase, WriteProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{NewProject, ProjectPatch};
use crate::shared::clock::Clock;
use crate::shared::editor_state::{EditorSessions, EditorState};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// In-memory editing sessions, one per operator email.
///
/// A failed save leaves the session open with its staged edits so the
/// operator can retry.
pub struct ProjectEditorService {
    read: Arc<dyn ReadProjectsUseCase + Send + Sync>,
    write: Arc<dyn WriteProjectsUseCase + Send + Sync>,
    clock: Arc<dyn Clock>,
    sessions: EditorSessions<ProjectForm>,
}

impl ProjectEditorService {
    pub fn new(
        read: Arc<dyn ReadProjectsUseCase + Send + Sync>,
        write: Arc<dyn WriteProjectsUseCase + Send + Sync>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read,
            write,
            clock,
            sessions: EditorSessions::default(),
        }
    }

    async fn save(
        &self,
        session: &AdminSession,
        state: &mut EditorState<ProjectForm>,
    ) -> Result<String, ProjectEditorError> {
        let now = self.clock.now_millis();

        let result = match state {
            EditorState::Closed => return Err(ProjectEditorError::NotEditing),
            EditorState::EditingNew { form } => {
                let submission = form.to_submission(now)?;
                self.write.create(session, new_project(submission)).await
            }
            EditorState::EditingExisting { id, form } => {
                let submission = form.to_submission(now)?;
                self.write
                    .update(session, id.as_str(), project_patch(submission))
                    .await
                    .map(|_| id.clone())
            }
        };

        match result {
            Ok(id) => {
                state.commit_saved();
                Ok(id)
            }
            Err(e) => {
                error!(
                    project_id = state.editing_id().unwrap_or("<new>"),
                    "Saving project failed, keeping staged edits: {}", e
                );
                Err(e.into())
            }
        }
    }
}

fn editing_form(
    state: &mut EditorState<ProjectForm>,
) -> Result<&mut ProjectForm, ProjectEditorError> {
    state.form_mut().ok_or(ProjectEditorError::NotEditing)
}

fn new_project(submission: ProjectSubmission) -> NewProject {
    NewProject {
        title: submission.title,
        description: submission.description,
        short_description: submission.short_description,
        github_urls: submission.github_urls,
        live_url: submission.live_url,
        tags: submission.tags,
        technologies: submission.technologies,
        media: submission.media,
        thumbnail_index: Some(submission.thumbnail_index),
        featured: submission.featured,
        featured_order: submission.featured_order,
        created_at: submission.updated_at,
        updated_at: submission.updated_at,
    }
}

/// Full overwrite of the editable fields; `created_at` is left alone.
fn project_patch(submission: ProjectSubmission) -> ProjectPatch {
    ProjectPatch {
        title: submission.title.into(),
        description: submission.description.into(),
        short_description: submission.short_description.into(),
        github_urls: submission.github_urls.into(),
        live_url: PatchField::from_option(submission.live_url),
        tags: submission.tags.into(),
        technologies: submission.technologies.into(),
        media: submission.media.into(),
        thumbnail_index: submission.thumbnail_index.into(),
        featured: submission.featured.into(),
        featured_order: submission.featured_order.into(),
        updated_at: submission.updated_at.into(),
    }
}

#[async_trait]
impl ProjectEditorUseCase for ProjectEditorService {
    async fn current(&self, session: &AdminSession) -> ProjectEditorView {
        match self.sessions.get(session.email()).await {
            Some(state) => ProjectEditorView::of(&*state.lock().await),
            None => ProjectEditorView::of(&EditorState::Closed),
        }
    }

    async fn apply(
        &self,
        session: &AdminSession,
        command: ProjectEditorCommand,
    ) -> Result<ProjectEditorView, ProjectEditorError> {
        let slot = self.sessions.get_or_default(session.email()).await;
        let mut guard = slot.lock().await;
        let state = &mut *guard;

        match command {
            ProjectEditorCommand::OpenNew => state.open_new(ProjectForm::new()),
            ProjectEditorCommand::OpenExisting { id } => {
                let project = self
                    .read
                    .get(&id)
                    .await
                    .ok_or(ProjectEditorError::NotFound)?;
                state.open_existing(id, ProjectForm::from_project(&project));
            }
            ProjectEditorCommand::Close => state.close(),
            ProjectEditorCommand::SetFields { fields } => editing_form(state)?.set_fields(fields),
            ProjectEditorCommand::AppendMedia { items } => {
                editing_form(state)?.append_media(items)
            }
            ProjectEditorCommand::RemoveMedia { index } => {
                editing_form(state)?.remove_media(index)?
            }
            ProjectEditorCommand::MoveMediaLeft { index } => {
                editing_form(state)?.move_media_left(index)?
            }
            ProjectEditorCommand::MoveMediaRight { index } => {
                editing_form(state)?.move_media_right(index)?
            }
            ProjectEditorCommand::SetThumbnail { index } => {
                editing_form(state)?.set_thumbnail(index)?
            }
            ProjectEditorCommand::Save => {
                let saved_id = self.save(session, state).await?;
                let mut view = ProjectEditorView::of(state);
                view.saved_id = Some(saved_id);
                return Ok(view);
            }
        }

        Ok(ProjectEditorView::of(state))
    }
}
