mod project_editor;
mod read_projects;
mod write_projects;

pub use project_editor::{
    ProjectEditorCommand, ProjectEditorError, ProjectEditorUseCase, ProjectEditorView,
};
pub use read_projects::ReadProjectsUseCase;
pub use write_projects::{WriteProjectError, WriteProjectsUseCase};
