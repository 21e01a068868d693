mod download_resume_service;
mod resume_editor_service;
mod resume_gateway_service;

pub use download_resume_service::DownloadResumeService;
pub use resume_editor_service::ResumeEditorService;
pub use resume_gateway_service::ResumeGatewayService;
