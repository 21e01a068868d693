use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::auth::application::use_cases::logout_admin::LogoutAdminUseCase;
use crate::auth::application::use_cases::verify_session::VerifySessionUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectEditorUseCase, ReadProjectsUseCase, WriteProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::resume::application::ports::incoming::use_cases::{
    DownloadResumeUseCase, ReadResumesUseCase, ResumeEditorUseCase, WriteResumesUseCase,
};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::uploads::application::ports::incoming::use_cases::UploadMediaUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` of stubs. Reads are empty, writes report
/// "not configured" and only the test admin token verifies; override
/// whatever a test exercises.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    resume: ResumeUseCases,
    uploads: Arc<dyn UploadMediaUseCase + Send + Sync>,
    auth: AuthUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                read: Arc::new(StubProjectReads::default()),
                write: Arc::new(StubProjectWrites::default()),
                editor: Arc::new(StubProjectEditor),
            },
            resume: ResumeUseCases {
                read: Arc::new(StubResumeReads::default()),
                write: Arc::new(StubResumeWrites::default()),
                editor: Arc::new(StubResumeEditor),
                download: Arc::new(StubResumeDownload::default()),
            },
            uploads: Arc::new(StubUploads::default()),
            auth: AuthUseCases {
                login: Arc::new(StubLogin),
                logout: Arc::new(StubLogout),
                verify_session: Arc::new(StubVerifySession::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ===== auth =====

    pub fn with_login(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_verify_session(
        mut self,
        uc: impl VerifySessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.verify_session = Arc::new(uc);
        self
    }

    // ===== projects =====

    pub fn with_project_read(mut self, uc: impl ReadProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.read = Arc::new(uc);
        self
    }

    pub fn with_project_write(
        mut self,
        uc: impl WriteProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.write = Arc::new(uc);
        self
    }

    pub fn with_project_editor(
        mut self,
        uc: impl ProjectEditorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.editor = Arc::new(uc);
        self
    }

    // ===== resumes =====

    pub fn with_resume_read(mut self, uc: impl ReadResumesUseCase + Send + Sync + 'static) -> Self {
        self.resume.read = Arc::new(uc);
        self
    }

    pub fn with_resume_write(
        mut self,
        uc: impl WriteResumesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.write = Arc::new(uc);
        self
    }

    pub fn with_resume_editor(
        mut self,
        uc: impl ResumeEditorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.editor = Arc::new(uc);
        self
    }

    pub fn with_resume_download(
        mut self,
        uc: impl DownloadResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.download = Arc::new(uc);
        self
    }

    // ===== uploads =====

    pub fn with_uploads(mut self, uc: impl UploadMediaUseCase + Send + Sync + 'static) -> Self {
        self.uploads = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            resume: self.resume,
            uploads: self.uploads,
            auth: self.auth,
        })
    }
}
