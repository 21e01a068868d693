//! Google Docs share-link helpers.
//!
//! Pure string transforms over share links; nothing here talks to the network.

use std::sync::LazyLock;

use regex::Regex;

static DOCUMENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("document id pattern is valid")
});

/// Pulls the document id out of any `/document/d/{id}` style link.
pub fn extract_google_doc_id(url: &str) -> Option<String> {
    DOCUMENT_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn google_doc_preview_url(url: &str) -> Option<String> {
    extract_google_doc_id(url).map(|id| format!("https://docs.google.com/document/d/{id}/preview"))
}

pub fn google_doc_export_pdf_url(url: &str) -> Option<String> {
    extract_google_doc_id(url)
        .map(|id| format!("https://docs.google.com/document/d/{id}/export?format=pdf"))
}
