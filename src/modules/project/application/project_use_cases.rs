use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectEditorUseCase, ReadProjectsUseCase, WriteProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub read: Arc<dyn ReadProjectsUseCase + Send + Sync>,
    pub write: Arc<dyn WriteProjectsUseCase + Send + Sync>,
    pub editor: Arc<dyn ProjectEditorUseCase + Send + Sync>,
}
