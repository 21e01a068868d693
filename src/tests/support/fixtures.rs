use crate::modules::project::application::domain::entities::Project;
use crate::modules::resume::application::domain::entities::{Resume, ResumeDomain, SourceType};
use crate::modules::resume::application::ports::outgoing::NewResume;

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        description: format!("Long description of {id}"),
        short_description: format!("Short {id}"),
        github_urls: vec![format!("https://github.com/me/{id}")],
        live_url: None,
        tags: vec!["Robotics".to_string()],
        technologies: vec!["Rust".to_string()],
        media: Vec::new(),
        thumbnail_index: None,
        featured: false,
        featured_order: 0,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}

pub fn sample_resume(id: &str) -> Resume {
    Resume {
        id: id.to_string(),
        title: format!("Resume {id}"),
        domain: ResumeDomain::General,
        description: String::new(),
        source_type: SourceType::Pdf,
        file_url: format!("https://storage.googleapis.com/media/resumes/1_{id}.pdf"),
        file_name: format!("{id}.pdf"),
        updated_at: 1_700_000_000_000,
    }
}

pub fn sample_new_resume() -> NewResume {
    NewResume {
        title: "Robotics CV".to_string(),
        domain: ResumeDomain::Robotics,
        description: "Two pages".to_string(),
        source_type: SourceType::Pdf,
        file_url: "https://storage.googleapis.com/media/resumes/1_cv.pdf".to_string(),
        file_name: "cv.pdf".to_string(),
        updated_at: 1_700_000_000_000,
    }
}
