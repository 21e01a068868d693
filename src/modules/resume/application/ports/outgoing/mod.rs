pub mod document_fetcher;
pub mod resume_store;

pub use document_fetcher::{DocumentFetchError, DocumentFetcher};
pub use resume_store::{NewResume, ResumePatch, ResumeStore, ResumeStoreError};
