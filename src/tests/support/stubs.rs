use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::login_admin::{
    LoginAdminUseCase, LoginError, LoginRequest, LoginResponse,
};
use crate::auth::application::use_cases::logout_admin::{LogoutAdminUseCase, LogoutError};
use crate::auth::application::use_cases::verify_session::{
    VerifySessionError, VerifySessionUseCase,
};
use crate::modules::project::application::domain::entities::{
    sort_by_featured_order, MediaType, Project,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectEditorCommand, ProjectEditorError, ProjectEditorUseCase, ProjectEditorView,
    ReadProjectsUseCase, WriteProjectError, WriteProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    NewProject, ProjectListFilter, ProjectPatch,
};
use crate::modules::resume::application::domain::entities::Resume;
use crate::modules::resume::application::ports::incoming::use_cases::{
    DownloadOutcome, DownloadResumeUseCase, ReadResumesUseCase, ResumeEditorCommand,
    ResumeEditorError, ResumeEditorUseCase, ResumeEditorView, WriteResumeError,
    WriteResumesUseCase,
};
use crate::modules::resume::application::ports::outgoing::{NewResume, ResumePatch};
use crate::modules::uploads::application::ports::incoming::use_cases::{
    UploadMediaCommand, UploadMediaError, UploadMediaUseCase, UploadedMedia,
};
use crate::shared::editor_state::EditorState;
use crate::shared::live::{ChangeFeed, Collection, LiveSubscription};
use crate::tests::support::auth_helper::{test_admin_session, ADMIN_TOKEN};
use crate::tests::support::fixtures::sample_project;

/// A subscription that yields one snapshot and then ends, since its change
/// feed is dropped right away.
fn single_snapshot<T: Clone + Send + Sync + 'static>(
    collection: Collection,
    snapshot: T,
) -> LiveSubscription<T> {
    let feed = ChangeFeed::default();
    LiveSubscription::spawn(&feed, collection, move || {
        futures::future::ready(snapshot.clone())
    })
}

// ============================================================================
// Auth
// ============================================================================

pub struct StubLogin;

#[async_trait]
impl LoginAdminUseCase for StubLogin {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        Err(LoginError::NotConfigured)
    }
}

pub struct StubLogout;

#[async_trait]
impl LogoutAdminUseCase for StubLogout {
    async fn execute(&self, _session: &AdminSession) -> Result<(), LogoutError> {
        Ok(())
    }
}

/// Accepts [`ADMIN_TOKEN`] and rejects any other token, unless built with
/// [`StubVerifySession::failing`].
#[derive(Default)]
pub struct StubVerifySession {
    error: Option<VerifySessionError>,
}

impl StubVerifySession {
    pub fn failing(error: VerifySessionError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl VerifySessionUseCase for StubVerifySession {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError> {
        if let Some(error) = self.error.clone() {
            return Err(error);
        }
        if token == ADMIN_TOKEN {
            Ok(test_admin_session())
        } else {
            Err(VerifySessionError::InvalidToken)
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Default)]
pub struct StubProjectReads {
    projects: Vec<Project>,
}

impl StubProjectReads {
    pub fn with(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    fn filtered(&self, filter: ProjectListFilter) -> Vec<Project> {
        if !filter.featured_only {
            return self.projects.clone();
        }
        let mut featured: Vec<Project> =
            self.projects.iter().filter(|p| p.featured).cloned().collect();
        sort_by_featured_order(&mut featured);
        featured
    }
}

#[async_trait]
impl ReadProjectsUseCase for StubProjectReads {
    async fn list(&self, filter: ProjectListFilter) -> Vec<Project> {
        self.filtered(filter)
    }

    async fn get(&self, id: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    fn subscribe(&self, filter: ProjectListFilter) -> LiveSubscription<Vec<Project>> {
        single_snapshot(Collection::Projects, self.filtered(filter))
    }
}

/// Writes fail with `NotConfigured` unless built with
/// [`StubProjectWrites::succeeding`].
pub struct StubProjectWrites {
    error: Option<WriteProjectError>,
}

impl Default for StubProjectWrites {
    fn default() -> Self {
        Self::failing(WriteProjectError::NotConfigured)
    }
}

impl StubProjectWrites {
    pub fn succeeding() -> Self {
        Self { error: None }
    }

    pub fn failing(error: WriteProjectError) -> Self {
        Self { error: Some(error) }
    }

    fn check(&self) -> Result<(), WriteProjectError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl WriteProjectsUseCase for StubProjectWrites {
    async fn create(
        &self,
        _session: &AdminSession,
        _project: NewProject,
    ) -> Result<String, WriteProjectError> {
        self.check()?;
        Ok("created-id".to_string())
    }

    async fn update(
        &self,
        _session: &AdminSession,
        _id: &str,
        _patch: ProjectPatch,
    ) -> Result<(), WriteProjectError> {
        self.check()
    }

    async fn delete(&self, _session: &AdminSession, _id: &str) -> Result<(), WriteProjectError> {
        self.check()
    }

    async fn toggle_featured(
        &self,
        _session: &AdminSession,
        id: &str,
    ) -> Result<Project, WriteProjectError> {
        self.check()?;
        let mut project = sample_project(id);
        project.featured = true;
        Ok(project)
    }
}

/// Always closed; every command is rejected as `NotEditing`.
pub struct StubProjectEditor;

#[async_trait]
impl ProjectEditorUseCase for StubProjectEditor {
    async fn current(&self, _session: &AdminSession) -> ProjectEditorView {
        ProjectEditorView::of(&EditorState::Closed)
    }

    async fn apply(
        &self,
        _session: &AdminSession,
        _command: ProjectEditorCommand,
    ) -> Result<ProjectEditorView, ProjectEditorError> {
        Err(ProjectEditorError::NotEditing)
    }
}

// ============================================================================
// Resumes
// ============================================================================

#[derive(Default)]
pub struct StubResumeReads {
    resumes: Vec<Resume>,
}

impl StubResumeReads {
    pub fn with(resumes: Vec<Resume>) -> Self {
        Self { resumes }
    }
}

#[async_trait]
impl ReadResumesUseCase for StubResumeReads {
    async fn list(&self) -> Vec<Resume> {
        self.resumes.clone()
    }

    async fn get(&self, id: &str) -> Option<Resume> {
        self.resumes.iter().find(|r| r.id == id).cloned()
    }

    fn subscribe(&self) -> LiveSubscription<Vec<Resume>> {
        single_snapshot(Collection::Resumes, self.resumes.clone())
    }
}

pub struct StubResumeWrites {
    error: Option<WriteResumeError>,
}

impl Default for StubResumeWrites {
    fn default() -> Self {
        Self::failing(WriteResumeError::NotConfigured)
    }
}

impl StubResumeWrites {
    pub fn succeeding() -> Self {
        Self { error: None }
    }

    pub fn failing(error: WriteResumeError) -> Self {
        Self { error: Some(error) }
    }

    fn check(&self) -> Result<(), WriteResumeError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl WriteResumesUseCase for StubResumeWrites {
    async fn create(
        &self,
        _session: &AdminSession,
        _resume: NewResume,
    ) -> Result<String, WriteResumeError> {
        self.check()?;
        Ok("created-id".to_string())
    }

    async fn update(
        &self,
        _session: &AdminSession,
        _id: &str,
        _patch: ResumePatch,
    ) -> Result<(), WriteResumeError> {
        self.check()
    }

    async fn delete(&self, _session: &AdminSession, _id: &str) -> Result<(), WriteResumeError> {
        self.check()
    }
}

pub struct StubResumeEditor;

#[async_trait]
impl ResumeEditorUseCase for StubResumeEditor {
    async fn current(&self, _session: &AdminSession) -> ResumeEditorView {
        ResumeEditorView::of(&EditorState::Closed)
    }

    async fn apply(
        &self,
        _session: &AdminSession,
        _command: ResumeEditorCommand,
    ) -> Result<ResumeEditorView, ResumeEditorError> {
        Err(ResumeEditorError::NotEditing)
    }
}

pub struct StubResumeDownload {
    outcome: DownloadOutcome,
}

impl Default for StubResumeDownload {
    fn default() -> Self {
        Self::returning(DownloadOutcome::NotFound)
    }
}

impl StubResumeDownload {
    pub fn returning(outcome: DownloadOutcome) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl DownloadResumeUseCase for StubResumeDownload {
    async fn execute(&self, _resume_id: &str) -> DownloadOutcome {
        self.outcome.clone()
    }
}

// ============================================================================
// Uploads
// ============================================================================

/// Stores nothing. Successful uploads land at `{folder}/1_{file_name}`.
pub struct StubUploads {
    error: Option<UploadMediaError>,
}

impl Default for StubUploads {
    fn default() -> Self {
        Self::failing(UploadMediaError::NotConfigured)
    }
}

impl StubUploads {
    pub fn succeeding() -> Self {
        Self { error: None }
    }

    pub fn failing(error: UploadMediaError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl UploadMediaUseCase for StubUploads {
    async fn upload(
        &self,
        _session: &AdminSession,
        command: UploadMediaCommand,
    ) -> Result<UploadedMedia, UploadMediaError> {
        if let Some(error) = self.error.clone() {
            return Err(error);
        }
        let path = format!("{}/1_{}", command.folder, command.file_name);
        Ok(UploadedMedia {
            url: format!("https://storage.googleapis.com/media/{path}"),
            path,
            media_type: MediaType::from_content_type(&command.content_type),
        })
    }

    async fn delete(&self, _session: &AdminSession, _path: &str) -> Result<(), UploadMediaError> {
        self.error.clone().map_or(Ok(()), Err)
    }
}
