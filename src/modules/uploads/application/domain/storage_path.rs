use std::fmt;

/// Top-level bucket folders the admin can upload into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    Projects,
    Resumes,
}

impl UploadFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::Projects => "projects",
            UploadFolder::Resumes => "resumes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "projects" => Some(UploadFolder::Projects),
            "resumes" => Some(UploadFolder::Resumes),
            _ => None,
        }
    }

    /// Folder a stored object lives in, if it is one of ours.
    pub fn of_path(path: &str) -> Option<Self> {
        let (folder, rest) = path.split_once('/')?;
        if rest.is_empty() {
            return None;
        }
        Self::parse(folder)
    }
}

impl fmt::Display for UploadFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{folder}/{now_ms}_{name}` with every char outside `[A-Za-z0-9.-]`
/// replaced by `_`.
pub fn derive_storage_path(folder: UploadFolder, original_file_name: &str, now_ms: i64) -> String {
    let sanitized: String = original_file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{folder}/{now_ms}_{sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(
            derive_storage_path(UploadFolder::Projects, "rover-v2.png", 1700),
            "projects/1700_rover-v2.png"
        );
    }

    #[test]
    fn replaces_unsafe_characters() {
        assert_eq!(
            derive_storage_path(UploadFolder::Resumes, "My CV (final).pdf", 5),
            "resumes/5_My_CV__final_.pdf"
        );
    }

    #[test]
    fn multibyte_character_becomes_single_underscore() {
        assert_eq!(
            derive_storage_path(UploadFolder::Projects, "café.jpg", 1),
            "projects/1_caf_.jpg"
        );
    }

    #[test]
    fn folder_of_managed_paths() {
        assert_eq!(
            UploadFolder::of_path("projects/1_a.png"),
            Some(UploadFolder::Projects)
        );
        assert_eq!(
            UploadFolder::of_path("resumes/1_cv.pdf"),
            Some(UploadFolder::Resumes)
        );
        assert_eq!(UploadFolder::of_path("resumes/"), None);
        assert_eq!(UploadFolder::of_path("secrets/key.json"), None);
        assert_eq!(UploadFolder::of_path("projects"), None);
    }

    #[test]
    fn parses_only_known_folders() {
        assert_eq!(UploadFolder::parse("resumes"), Some(UploadFolder::Resumes));
        assert_eq!(UploadFolder::parse("Projects"), None);
        assert_eq!(UploadFolder::parse("blog"), None);
    }
}
