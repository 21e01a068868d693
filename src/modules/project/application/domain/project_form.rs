use serde::{Deserialize, Serialize};

use super::entities::{MediaItem, Project};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectFormError {
    #[error("Media index {index} is out of range for {len} item(s)")]
    MediaIndexOutOfRange { index: usize, len: usize },

    #[error("Title is required.")]
    TitleRequired,
}

//
// ──────────────────────────────────────────────────────────
// Staged form
// ──────────────────────────────────────────────────────────
//

/// Staged edits of a project in the admin panel.
///
/// List fields are kept in the text form the operator types them in
/// (`github_urls` one per line, `tags` and `technologies` comma separated)
/// and are only split on submission. `thumbnail_index` always points inside
/// `media` (or is 0 when `media` is empty); every media mutation keeps it so.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub github_urls: String,
    pub live_url: String,
    pub tags: String,
    pub technologies: String,
    pub featured: bool,
    pub featured_order: i64,
    pub media: Vec<MediaItem>,
    pub thumbnail_index: usize,
}

/// Partial update of the text and flag fields. Absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFieldsUpdate {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub github_urls: Option<String>,
    pub live_url: Option<String>,
    pub tags: Option<String>,
    pub technologies: Option<String>,
    pub featured: Option<bool>,
    pub featured_order: Option<i64>,
}

/// Normalized form contents, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSubmission {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub github_urls: Vec<String>,
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub featured_order: i64,
    pub media: Vec<MediaItem>,
    pub thumbnail_index: usize,
    pub updated_at: i64,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            short_description: project.short_description.clone(),
            description: project.description.clone(),
            github_urls: project.github_urls.join("\n"),
            live_url: project.live_url.clone().unwrap_or_default(),
            tags: project.tags.join(", "),
            technologies: project.technologies.join(", "),
            featured: project.featured,
            featured_order: project.featured_order,
            media: project.media.clone(),
            thumbnail_index: project.resolved_thumbnail_index(),
        }
    }

    pub fn set_fields(&mut self, update: ProjectFieldsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(short_description) = update.short_description {
            self.short_description = short_description;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(github_urls) = update.github_urls {
            self.github_urls = github_urls;
        }
        if let Some(live_url) = update.live_url {
            self.live_url = live_url;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(technologies) = update.technologies {
            self.technologies = technologies;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(featured_order) = update.featured_order {
            self.featured_order = featured_order;
        }
    }

    // ──── Media ────

    pub fn append_media(&mut self, items: Vec<MediaItem>) {
        self.media.extend(items);
    }

    pub fn remove_media(&mut self, index: usize) -> Result<(), ProjectFormError> {
        self.check_index(index)?;

        self.media.remove(index);
        if self.thumbnail_index >= index && self.thumbnail_index > 0 {
            self.thumbnail_index -= 1;
        }
        self.clamp_thumbnail();
        Ok(())
    }

    /// Swaps the item with its left neighbour. No-op for the first item.
    pub fn move_media_left(&mut self, index: usize) -> Result<(), ProjectFormError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(());
        }
        self.swap_media(index - 1, index);
        Ok(())
    }

    /// Swaps the item with its right neighbour. No-op for the last item.
    pub fn move_media_right(&mut self, index: usize) -> Result<(), ProjectFormError> {
        self.check_index(index)?;
        if index + 1 == self.media.len() {
            return Ok(());
        }
        self.swap_media(index, index + 1);
        Ok(())
    }

    pub fn set_thumbnail(&mut self, index: usize) -> Result<(), ProjectFormError> {
        self.check_index(index)?;
        self.thumbnail_index = index;
        Ok(())
    }

    // ──── Submission ────

    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn to_submission(&self, now_ms: i64) -> Result<ProjectSubmission, ProjectFormError> {
        if !self.can_save() {
            return Err(ProjectFormError::TitleRequired);
        }

        let live_url = self.live_url.trim();
        let thumbnail_index = if self.thumbnail_index < self.media.len() {
            self.thumbnail_index
        } else {
            0
        };

        Ok(ProjectSubmission {
            title: self.title.trim().to_string(),
            short_description: self.short_description.trim().to_string(),
            description: self.description.trim().to_string(),
            github_urls: split_list(&self.github_urls, '\n'),
            live_url: (!live_url.is_empty()).then(|| live_url.to_string()),
            tags: split_list(&self.tags, ','),
            technologies: split_list(&self.technologies, ','),
            featured: self.featured,
            featured_order: self.featured_order,
            media: self.media.clone(),
            thumbnail_index,
            updated_at: now_ms,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), ProjectFormError> {
        if index < self.media.len() {
            Ok(())
        } else {
            Err(ProjectFormError::MediaIndexOutOfRange {
                index,
                len: self.media.len(),
            })
        }
    }

    /// Swaps two media items; the thumbnail follows whichever item it was on.
    fn swap_media(&mut self, a: usize, b: usize) {
        self.media.swap(a, b);
        if self.thumbnail_index == a {
            self.thumbnail_index = b;
        } else if self.thumbnail_index == b {
            self.thumbnail_index = a;
        }
    }

    fn clamp_thumbnail(&mut self) {
        if self.media.is_empty() {
            self.thumbnail_index = 0;
        } else if self.thumbnail_index >= self.media.len() {
            self.thumbnail_index = self.media.len() - 1;
        }
    }
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_media(count: usize, thumbnail_index: usize) -> ProjectForm {
        ProjectForm {
            title: "Rover".to_string(),
            media: (0..count)
                .map(|i| MediaItem::image(format!("m{i}")))
                .collect(),
            thumbnail_index,
            ..Default::default()
        }
    }

    fn urls(form: &ProjectForm) -> Vec<&str> {
        form.media.iter().map(|m| m.url.as_str()).collect()
    }

    fn thumbnail_url(form: &ProjectForm) -> &str {
        &form.media[form.thumbnail_index].url
    }

    #[test]
    fn from_project_joins_lists_back_to_text() {
        let project = Project {
            id: "p1".to_string(),
            title: "Rover".to_string(),
            description: "d".to_string(),
            short_description: "s".to_string(),
            github_urls: vec!["https://a".to_string(), "https://b".to_string()],
            live_url: Some("https://live".to_string()),
            tags: vec!["ROS".to_string(), "C++".to_string()],
            technologies: vec!["Rust".to_string()],
            media: vec![MediaItem::image("x")],
            thumbnail_index: Some(4),
            featured: true,
            featured_order: 2,
            created_at: 1,
            updated_at: 2,
        };

        let form = ProjectForm::from_project(&project);

        assert_eq!(form.github_urls, "https://a\nhttps://b");
        assert_eq!(form.tags, "ROS, C++");
        assert_eq!(form.technologies, "Rust");
        assert_eq!(form.live_url, "https://live");
        assert_eq!(form.thumbnail_index, 0);
        assert!(form.featured);
        assert_eq!(form.featured_order, 2);
    }

    #[test]
    fn remove_before_thumbnail_keeps_pointing_at_same_item() {
        let mut form = form_with_media(4, 2);
        form.remove_media(0).unwrap();

        assert_eq!(form.thumbnail_index, 1);
        assert_eq!(thumbnail_url(&form), "m2");
    }

    #[test]
    fn remove_thumbnail_moves_to_previous_item() {
        let mut form = form_with_media(3, 2);
        form.remove_media(2).unwrap();

        assert_eq!(form.thumbnail_index, 1);
        assert_eq!(urls(&form), vec!["m0", "m1"]);
    }

    #[test]
    fn remove_first_item_when_it_is_thumbnail() {
        let mut form = form_with_media(3, 0);
        form.remove_media(0).unwrap();

        assert_eq!(form.thumbnail_index, 0);
        assert_eq!(thumbnail_url(&form), "m1");
    }

    #[test]
    fn remove_after_thumbnail_leaves_it_alone() {
        let mut form = form_with_media(3, 0);
        form.remove_media(2).unwrap();
        assert_eq!(form.thumbnail_index, 0);
    }

    #[test]
    fn remove_last_remaining_item() {
        let mut form = form_with_media(1, 0);
        form.remove_media(0).unwrap();

        assert!(form.media.is_empty());
        assert_eq!(form.thumbnail_index, 0);
    }

    #[test]
    fn move_thumbnail_right_follows_item() {
        let mut form = form_with_media(3, 0);
        form.move_media_right(0).unwrap();

        assert_eq!(urls(&form), vec!["m1", "m0", "m2"]);
        assert_eq!(form.thumbnail_index, 1);
        assert_eq!(thumbnail_url(&form), "m0");
    }

    #[test]
    fn move_neighbour_onto_thumbnail_slot() {
        let mut form = form_with_media(3, 1);
        form.move_media_left(2).unwrap();

        assert_eq!(urls(&form), vec!["m0", "m2", "m1"]);
        assert_eq!(thumbnail_url(&form), "m1");
    }

    #[test]
    fn moving_past_the_ends_is_a_no_op() {
        let mut form = form_with_media(2, 1);
        form.move_media_left(0).unwrap();
        form.move_media_right(1).unwrap();

        assert_eq!(urls(&form), vec!["m0", "m1"]);
        assert_eq!(form.thumbnail_index, 1);
    }

    #[test]
    fn out_of_range_indices_are_rejected_without_change() {
        let mut form = form_with_media(2, 1);
        let before = form.clone();

        let expected = ProjectFormError::MediaIndexOutOfRange { index: 2, len: 2 };
        assert_eq!(form.remove_media(2), Err(expected.clone()));
        assert_eq!(form.move_media_left(2), Err(expected.clone()));
        assert_eq!(form.move_media_right(2), Err(expected.clone()));
        assert_eq!(form.set_thumbnail(2), Err(expected));

        assert_eq!(form, before);
    }

    #[test]
    fn append_keeps_existing_thumbnail() {
        let mut form = form_with_media(1, 0);
        form.append_media(vec![MediaItem::video("clip")]);

        assert_eq!(urls(&form), vec!["m0", "clip"]);
        assert_eq!(form.thumbnail_index, 0);
        form.set_thumbnail(1).unwrap();
        assert_eq!(thumbnail_url(&form), "clip");
    }

    #[test]
    fn set_fields_is_partial() {
        let mut form = form_with_media(0, 0);
        form.set_fields(ProjectFieldsUpdate {
            tags: Some("a, b".to_string()),
            featured: Some(true),
            ..Default::default()
        });

        assert_eq!(form.title, "Rover");
        assert_eq!(form.tags, "a, b");
        assert!(form.featured);
    }

    #[test]
    fn submission_normalizes_text_fields() {
        let form = ProjectForm {
            title: "  Rover  ".to_string(),
            github_urls: "https://a\n\n  https://b  \n".to_string(),
            live_url: "   ".to_string(),
            tags: "ROS, , C++ ,".to_string(),
            technologies: " Rust ".to_string(),
            ..Default::default()
        };

        let submission = form.to_submission(1_700_000_000_000).unwrap();

        assert_eq!(submission.title, "Rover");
        assert_eq!(submission.github_urls, vec!["https://a", "https://b"]);
        assert_eq!(submission.live_url, None);
        assert_eq!(submission.tags, vec!["ROS", "C++"]);
        assert_eq!(submission.technologies, vec!["Rust"]);
        assert_eq!(submission.updated_at, 1_700_000_000_000);
    }

    #[test]
    fn blank_title_cannot_be_saved() {
        let form = ProjectForm {
            title: "   ".to_string(),
            ..Default::default()
        };

        assert!(!form.can_save());
        assert_eq!(form.to_submission(0), Err(ProjectFormError::TitleRequired));
    }
}
