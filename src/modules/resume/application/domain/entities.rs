use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::google_docs::google_doc_preview_url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResumeDomain {
    #[serde(rename = "Robotics")]
    Robotics,
    #[serde(rename = "AI / Machine Learning")]
    AiMachineLearning,
    #[serde(rename = "Embedded / Devices")]
    EmbeddedDevices,
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[default]
    #[serde(rename = "General")]
    General,
}

impl ResumeDomain {
    pub const ALL: [ResumeDomain; 5] = [
        ResumeDomain::Robotics,
        ResumeDomain::AiMachineLearning,
        ResumeDomain::EmbeddedDevices,
        ResumeDomain::SoftwareEngineering,
        ResumeDomain::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResumeDomain::Robotics => "Robotics",
            ResumeDomain::AiMachineLearning => "AI / Machine Learning",
            ResumeDomain::EmbeddedDevices => "Embedded / Devices",
            ResumeDomain::SoftwareEngineering => "Software Engineering",
            ResumeDomain::General => "General",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for ResumeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the resume document lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SourceType {
    /// Uploaded PDF in object storage
    #[default]
    #[serde(rename = "pdf")]
    Pdf,
    /// Shared Google Doc; `file_url` holds the share link
    #[serde(rename = "google-doc")]
    GoogleDoc,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Pdf => "pdf",
            SourceType::GoogleDoc => "google-doc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pdf" => Some(SourceType::Pdf),
            "google-doc" => Some(SourceType::GoogleDoc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub domain: ResumeDomain,
    pub description: String,
    #[serde(default)]
    pub source_type: SourceType,
    pub file_url: String,
    pub file_name: String,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl Resume {
    /// Embeddable preview for Google Doc resumes.
    pub fn preview_url(&self) -> Option<String> {
        match self.source_type {
            SourceType::GoogleDoc => google_doc_preview_url(&self.file_url),
            SourceType::Pdf => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn domain_wire_names_are_display_labels() {
        for domain in ResumeDomain::ALL {
            let wire = serde_json::to_value(domain).unwrap();
            assert_eq!(wire, json!(domain.label()));
            assert_eq!(ResumeDomain::from_label(domain.label()), Some(domain));
        }
        assert_eq!(ResumeDomain::from_label("Astrology"), None);
    }

    #[test]
    fn missing_source_type_defaults_to_pdf() {
        let resume: Resume = serde_json::from_value(json!({
            "id": "r1",
            "title": "Robotics CV",
            "domain": "Robotics",
            "description": "",
            "fileUrl": "https://storage.googleapis.com/b/resumes/cv.pdf",
            "fileName": "cv.pdf",
            "updatedAt": 5
        }))
        .unwrap();

        assert_eq!(resume.source_type, SourceType::Pdf);
        assert_eq!(resume.preview_url(), None);
    }

    #[test]
    fn google_doc_resume_has_preview() {
        let resume: Resume = serde_json::from_value(json!({
            "id": "r1",
            "title": "CV",
            "domain": "General",
            "description": "",
            "sourceType": "google-doc",
            "fileUrl": "https://docs.google.com/document/d/abc123/edit",
            "fileName": "CV",
            "updatedAt": 5
        }))
        .unwrap();

        assert_eq!(
            resume.preview_url().as_deref(),
            Some("https://docs.google.com/document/d/abc123/preview")
        );
    }

    #[test]
    fn source_type_round_trips_through_text() {
        assert_eq!(SourceType::parse("google-doc"), Some(SourceType::GoogleDoc));
        assert_eq!(SourceType::parse(SourceType::Pdf.as_str()), Some(SourceType::Pdf));
        assert_eq!(SourceType::parse("docx"), None);
    }
}
