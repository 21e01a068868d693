//! Resume download naming and source resolution.

use super::entities::{Resume, SourceType};
use crate::shared::google_docs::google_doc_export_pdf_url;

/// URL the PDF bytes are fetched from.
///
/// Google Docs are exported as PDF; a link without a recognisable document id
/// is used as is.
pub fn resolve_download_url(resume: &Resume) -> String {
    match resume.source_type {
        SourceType::GoogleDoc => google_doc_export_pdf_url(&resume.file_url)
            .unwrap_or_else(|| resume.file_url.clone()),
        SourceType::Pdf => resume.file_url.clone(),
    }
}

pub fn download_file_name(owner_name: &str, resume: &Resume) -> String {
    format!("{owner_name}'s Resume - {}.pdf", resume.domain)
}
