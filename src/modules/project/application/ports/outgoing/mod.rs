pub mod project_store;

pub use project_store::{NewProject, ProjectListFilter, ProjectPatch, ProjectStore, ProjectStoreError};
