use async_trait::async_trait;

/// Result of preparing a resume download. Fetch failures are not errors: the
/// caller falls back to sending the visitor to the document URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Ready { bytes: Vec<u8>, file_name: String },
    Fallback { url: String, file_name: String },
    NotFound,
}

#[async_trait]
pub trait DownloadResumeUseCase: Send + Sync {
    async fn execute(&self, resume_id: &str) -> DownloadOutcome;
}
