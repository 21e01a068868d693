use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::resume::application::domain::download::{
    download_file_name, resolve_download_url,
};
use crate::modules::resume::application::ports::incoming::use_cases::{
    DownloadOutcome, DownloadResumeUseCase, ReadResumesUseCase,
};
use crate::modules::resume::application::ports::outgoing::DocumentFetcher;

pub struct DownloadResumeService {
    read: Arc<dyn ReadResumesUseCase + Send + Sync>,
    fetcher: Arc<dyn DocumentFetcher>,
    owner_name: String,
}

impl DownloadResumeService {
    pub fn new(
        read: Arc<dyn ReadResumesUseCase + Send + Sync>,
        fetcher: Arc<dyn DocumentFetcher>,
        owner_name: String,
    ) -> Self {
        Self {
            read,
            fetcher,
            owner_name,
        }
    }
}

#[async_trait]
impl DownloadResumeUseCase for DownloadResumeService {
    async fn execute(&self, resume_id: &str) -> DownloadOutcome {
        let Some(resume) = self.read.get(resume_id).await else {
            return DownloadOutcome::NotFound;
        };

        let url = resolve_download_url(&resume);
        let file_name = download_file_name(&self.owner_name, &resume);

        match self.fetcher.fetch(&url).await {
            Ok(bytes) => {
                debug!(resume_id = %resume_id, size = bytes.len(), "Resume fetched for download");
                DownloadOutcome::Ready { bytes, file_name }
            }
            Err(e) => {
                warn!(
                    resume_id = %resume_id,
                    "Fetching resume failed, redirecting to source: {}", e
                );
                DownloadOutcome::Fallback { url, file_name }
            }
        }
    }
}
