use std::sync::Arc;

use crate::modules::resume::application::ports::incoming::use_cases::{
    DownloadResumeUseCase, ReadResumesUseCase, ResumeEditorUseCase, WriteResumesUseCase,
};

#[derive(Clone)]
pub struct ResumeUseCases {
    pub read: Arc<dyn ReadResumesUseCase + Send + Sync>,
    pub write: Arc<dyn WriteResumesUseCase + Send + Sync>,
    pub editor: Arc<dyn ResumeEditorUseCase + Send + Sync>,
    pub download: Arc<dyn DownloadResumeUseCase + Send + Sync>,
}
