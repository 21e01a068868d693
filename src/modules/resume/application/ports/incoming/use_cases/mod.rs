mod download_resume;
mod read_resumes;
mod resume_editor;
mod write_resumes;

pub use download_resume::{DownloadOutcome, DownloadResumeUseCase};
pub use read_resumes::ReadResumesUseCase;
pub use resume_editor::{
    ResumeEditorCommand, ResumeEditorError, ResumeEditorUseCase, ResumeEditorView,
};
pub use write_resumes::{WriteResumeError, WriteResumesUseCase};
