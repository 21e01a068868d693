use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::resume::application::domain::resume_form::{ResumeForm, ResumeSubmission};
use crate::modules::resume::application::ports::incoming::use_cases::{
    ReadResumesUseCase, ResumeEditorCommand, ResumeEditorError, ResumeEditorUseCase,
    ResumeEditorView, WriteResumesUseCase,
};
use crate::modules::resume::application::ports::outgoing::{NewResume, ResumePatch};
use crate::shared::clock::Clock;
use crate::shared::editor_state::{EditorSessions, EditorState};

/// Per-operator resume editing sessions. Same lifecycle as the project
/// editor: invalid forms never reach the store, failed saves stay open.
pub struct ResumeEditorService {
    read: Arc<dyn ReadResumesUseCase + Send + Sync>,
    write: Arc<dyn WriteResumesUseCase + Send + Sync>,
    clock: Arc<dyn Clock>,
    sessions: EditorSessions<ResumeForm>,
}

impl ResumeEditorService {
    pub fn new(
        read: Arc<dyn ReadResumesUseCase + Send + Sync>,
        write: Arc<dyn WriteResumesUseCase + Send + Sync>,
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
        state: &mut EditorState<ResumeForm>,
    ) -> Result<String, ResumeEditorError> {
        let now = self.clock.now_millis();

        let result = match state {
            EditorState::Closed => return Err(ResumeEditorError::NotEditing),
            EditorState::EditingNew { form } => {
                let submission = form.to_submission(now)?;
                self.write.create(session, new_resume(submission)).await
            }
            EditorState::EditingExisting { id, form } => {
                let submission = form.to_submission(now)?;
                self.write
                    .update(session, id.as_str(), resume_patch(submission))
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
                    resume_id = state.editing_id().unwrap_or("<new>"),
                    "Saving resume failed, keeping staged edits: {}", e
                );
                Err(e.into())
            }
        }
    }
}

fn new_resume(submission: ResumeSubmission) -> NewResume {
    NewResume {
        title: submission.title,
        domain: submission.domain,
        description: submission.description,
        source_type: submission.source_type,
        file_url: submission.file_url,
        file_name: submission.file_name,
        updated_at: submission.updated_at,
    }
}

fn resume_patch(submission: ResumeSubmission) -> ResumePatch {
    ResumePatch {
        title: submission.title.into(),
        domain: submission.domain.into(),
        description: submission.description.into(),
        source_type: submission.source_type.into(),
        file_url: submission.file_url.into(),
        file_name: submission.file_name.into(),
        updated_at: submission.updated_at.into(),
    }
}

#[async_trait]
impl ResumeEditorUseCase for ResumeEditorService {
    async fn current(&self, session: &AdminSession) -> ResumeEditorView {
        match self.sessions.get(session.email()).await {
            Some(state) => ResumeEditorView::of(&*state.lock().await),
            None => ResumeEditorView::of(&EditorState::Closed),
        }
    }

    async fn apply(
        &self,
        session: &AdminSession,
        command: ResumeEditorCommand,
    ) -> Result<ResumeEditorView, ResumeEditorError> {
        let slot = self.sessions.get_or_default(session.email()).await;
        let mut guard = slot.lock().await;
        let state = &mut *guard;

        match command {
            ResumeEditorCommand::OpenNew => state.open_new(ResumeForm::new()),
            ResumeEditorCommand::OpenExisting { id } => {
                let resume = self
                    .read
                    .get(&id)
                    .await
                    .ok_or(ResumeEditorError::NotFound)?;
                state.open_existing(id, ResumeForm::from_resume(&resume));
            }
            ResumeEditorCommand::Close => state.close(),
            ResumeEditorCommand::SetFields { fields } => state
                .form_mut()
                .ok_or(ResumeEditorError::NotEditing)?
                .set_fields(fields),
            ResumeEditorCommand::AttachFile { url, file_name } => state
                .form_mut()
                .ok_or(ResumeEditorError::NotEditing)?
                .attach_file(url, file_name),
            ResumeEditorCommand::Save => {
                let saved_id = self.save(session, state).await?;
                let mut view = ResumeEditorView::of(state);
                view.saved_id = Some(saved_id);
                return Ok(view);
            }
        }

        Ok(ResumeEditorView::of(state))
    }
}
