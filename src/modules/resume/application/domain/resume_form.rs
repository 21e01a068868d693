use serde::{Deserialize, Serialize};

use super::entities::{Resume, ResumeDomain, SourceType};
use crate::shared::google_docs::extract_google_doc_id;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// The first issue that keeps a resume form from being saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResumeFormError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Upload a PDF file before saving.")]
    FileRequired,

    #[error("A Google Doc URL is required.")]
    GoogleDocUrlRequired,

    #[error("Could not extract a valid Google Doc ID from this URL.")]
    InvalidGoogleDocUrl,
}

//
// ──────────────────────────────────────────────────────────
// Staged form
// ──────────────────────────────────────────────────────────
//

/// Staged edits of a resume.
///
/// Both source modes keep their own staged value (`file_url`/`file_name` for
/// an uploaded PDF, `google_doc_url` for a shared doc), so flipping
/// `source_type` back and forth loses nothing. Only the active mode's value
/// is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeForm {
    pub title: String,
    pub domain: ResumeDomain,
    pub description: String,
    pub source_type: SourceType,
    pub file_url: String,
    pub file_name: String,
    pub google_doc_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFieldsUpdate {
    pub title: Option<String>,
    pub domain: Option<ResumeDomain>,
    pub description: Option<String>,
    pub source_type: Option<SourceType>,
    pub google_doc_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSubmission {
    pub title: String,
    pub domain: ResumeDomain,
    pub description: String,
    pub source_type: SourceType,
    pub file_url: String,
    pub file_name: String,
    pub updated_at: i64,
}

impl ResumeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_resume(resume: &Resume) -> Self {
        let google_doc_url = match resume.source_type {
            SourceType::GoogleDoc => resume.file_url.clone(),
            SourceType::Pdf => String::new(),
        };

        Self {
            title: resume.title.clone(),
            domain: resume.domain,
            description: resume.description.clone(),
            source_type: resume.source_type,
            file_url: resume.file_url.clone(),
            file_name: resume.file_name.clone(),
            google_doc_url,
        }
    }

    pub fn set_fields(&mut self, update: ResumeFieldsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(domain) = update.domain {
            self.domain = domain;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(source_type) = update.source_type {
            self.source_type = source_type;
        }
        if let Some(url) = update.google_doc_url {
            self.google_doc_url = url;
        }
    }

    /// Stages an uploaded PDF.
    pub fn attach_file(&mut self, file_url: String, file_name: String) {
        self.file_url = file_url;
        self.file_name = file_name;
    }

    pub fn validate(&self) -> Result<(), ResumeFormError> {
        if self.title.trim().is_empty() {
            return Err(ResumeFormError::TitleRequired);
        }

        match self.source_type {
            SourceType::Pdf if self.file_url.trim().is_empty() => {
                Err(ResumeFormError::FileRequired)
            }
            SourceType::Pdf => Ok(()),
            SourceType::GoogleDoc => {
                let url = self.google_doc_url.trim();
                if url.is_empty() {
                    Err(ResumeFormError::GoogleDocUrlRequired)
                } else if extract_google_doc_id(url).is_none() {
                    Err(ResumeFormError::InvalidGoogleDocUrl)
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn can_save(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_submission(&self, now_ms: i64) -> Result<ResumeSubmission, ResumeFormError> {
        self.validate()?;

        let title = self.title.trim().to_string();
        let (file_url, file_name) = match self.source_type {
            SourceType::Pdf => (self.file_url.clone(), self.file_name.clone()),
            SourceType::GoogleDoc => (self.google_doc_url.trim().to_string(), title.clone()),
        };

        Ok(ResumeSubmission {
            title,
            domain: self.domain,
            description: self.description.trim().to_string(),
            source_type: self.source_type,
            file_url,
            file_name,
            updated_at: now_ms,
        })
    }
}
