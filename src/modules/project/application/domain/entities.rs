use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Anything that is not a `video/*` upload is shown as an image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.trim().to_ascii_lowercase().starts_with("video/") {
            MediaType::Video
        } else {
            MediaType::Image
        }
    }
}

/// One carousel entry. Identity is its position in `Project::media`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Image,
            url: url.into(),
            caption: None,
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            media_type: MediaType::Video,
            url: url.into(),
            caption: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub github_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub media: Vec<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_index: Option<usize>,
    pub featured: bool,
    pub featured_order: i64,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl Project {
    /// Absent or out-of-range thumbnail indices fall back to the first item.
    pub fn resolved_thumbnail_index(&self) -> usize {
        match self.thumbnail_index {
            Some(i) if i < self.media.len() => i,
            _ => 0,
        }
    }

    pub fn thumbnail(&self) -> Option<&MediaItem> {
        self.media.get(self.resolved_thumbnail_index())
    }
}

/// Stable sort, so projects sharing a `featured_order` keep their incoming
/// (newest first) order.
pub fn sort_by_featured_order(projects: &mut [Project]) {
    projects.sort_by_key(|p| p.featured_order);
}
