use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    NewProject, ProjectListFilter, ProjectPatch, ProjectStore, ProjectStoreError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Store Implementation
// ============================================================================

/// Project collection backed by the `projects` table.
///
/// Built without a connection when `DATABASE_URL` is unset; every call then
/// reports `NotConfigured`.
#[derive(Clone)]
pub struct ProjectStorePostgres {
    db: Option<Arc<DatabaseConnection>>,
}

impl ProjectStorePostgres {
    pub fn new(db: Option<Arc<DatabaseConnection>>) -> Self {
        Self { db }
    }

    fn db(&self) -> Result<&DatabaseConnection, ProjectStoreError> {
        self.db.as_deref().ok_or(ProjectStoreError::NotConfigured)
    }
}

#[async_trait]
impl ProjectStore for ProjectStorePostgres {
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectStoreError> {
        let mut query = Entity::find();
        if filter.featured_only {
            query = query.filter(Column::Featured.eq(true));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(self.db()?)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                model_to_project(row)
                    .map_err(|e| warn!(project_id = %id, "Skipping undecodable project: {}", e))
                    .ok()
            })
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, ProjectStoreError> {
        let row = Entity::find_by_id(id.to_string())
            .one(self.db()?)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|row| {
            model_to_project(row)
                .map_err(|e| warn!(project_id = %id, "Stored project is undecodable: {}", e))
                .ok()
        }))
    }

    async fn create(&self, project: NewProject) -> Result<String, ProjectStoreError> {
        let db = self.db()?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(project.title),
            description: Set(project.description),
            short_description: Set(project.short_description),
            github_urls: Set(to_json(&project.github_urls)?),
            live_url: Set(project.live_url),
            tags: Set(to_json(&project.tags)?),
            technologies: Set(to_json(&project.technologies)?),
            media: Set(to_json(&project.media)?),
            thumbnail_index: Set(project.thumbnail_index.map(to_db_index).transpose()?),
            featured: Set(project.featured),
            featured_order: Set(project.featured_order),
            created_at: Set(project.created_at),
            updated_at: Set(project.updated_at),
        };

        let inserted = model.insert(db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn update(&self, id: &str, patch: ProjectPatch) -> Result<(), ProjectStoreError> {
        let db = self.db()?;

        if patch.is_empty() {
            return Entity::find_by_id(id.to_string())
                .one(db)
                .await
                .map_err(map_db_err)?
                .map(|_| ())
                .ok_or(ProjectStoreError::NotFound);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = patch.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = patch.description {
            model.description = Set(description);
        }
        if let PatchField::Value(short_description) = patch.short_description {
            model.short_description = Set(short_description);
        }
        if let PatchField::Value(urls) = patch.github_urls {
            model.github_urls = Set(to_json(&urls)?);
        }
        match patch.live_url {
            PatchField::Unset => {}
            PatchField::Null => model.live_url = Set(None),
            PatchField::Value(url) => model.live_url = Set(Some(url)),
        }
        if let PatchField::Value(tags) = patch.tags {
            model.tags = Set(to_json(&tags)?);
        }
        if let PatchField::Value(technologies) = patch.technologies {
            model.technologies = Set(to_json(&technologies)?);
        }
        if let PatchField::Value(media) = patch.media {
            model.media = Set(to_json(&media)?);
        }
        match patch.thumbnail_index {
            PatchField::Unset => {}
            PatchField::Null => model.thumbnail_index = Set(None),
            PatchField::Value(index) => model.thumbnail_index = Set(Some(to_db_index(index)?)),
        }
        if let PatchField::Value(featured) = patch.featured {
            model.featured = Set(featured);
        }
        if let PatchField::Value(order) = patch.featured_order {
            model.featured_order = Set(order);
        }
        if let PatchField::Value(updated_at) = patch.updated_at {
            model.updated_at = Set(updated_at);
        }

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec(db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectStoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ProjectStoreError> {
        let result = Entity::delete_by_id(id.to_string())
            .exec(self.db()?)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectStoreError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectStoreError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        short_description: model.short_description,
        github_urls: from_json(&model.github_urls)?,
        live_url: model.live_url,
        tags: from_json(&model.tags)?,
        technologies: from_json(&model.technologies)?,
        media: from_json(&model.media)?,
        thumbnail_index: model
            .thumbnail_index
            .and_then(|i| usize::try_from(i).ok()),
        featured: model.featured,
        featured_order: model.featured_order,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn to_db_index(index: usize) -> Result<i32, ProjectStoreError> {
    i32::try_from(index)
        .map_err(|_| ProjectStoreError::Backend(format!("thumbnail index {index} is too large")))
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectStoreError> {
    serde_json::to_value(data).map_err(|e| ProjectStoreError::Backend(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectStoreError> {
    serde_json::from_value(json.clone()).map_err(|e| ProjectStoreError::Decode(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectStoreError {
    ProjectStoreError::Backend(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    use crate::modules::project::application::domain::entities::{MediaItem, MediaType};

    fn create_mock_project_model(id: &str, created_at: i64) -> projects::Model {
        projects::Model {
            id: id.to_string(),
            title: "Rover".to_string(),
            description: "Autonomous rover".to_string(),
            short_description: "Rover".to_string(),
            github_urls: json!(["https://github.com/me/rover"]),
            live_url: None,
            tags: json!(["ROS"]),
            technologies: json!(["Rust", "C++"]),
            media: json!([{ "type": "image", "url": "https://cdn/a.png" }]),
            thumbnail_index: Some(0),
            featured: false,
            featured_order: 0,
            created_at,
            updated_at: created_at,
        }
    }

    fn store_with(db: MockDatabase) -> ProjectStorePostgres {
        ProjectStorePostgres::new(Some(Arc::new(db.into_connection())))
    }

    fn new_project() -> NewProject {
        NewProject {
            title: "Rover".to_string(),
            description: "Autonomous rover".to_string(),
            short_description: "Rover".to_string(),
            github_urls: vec!["https://github.com/me/rover".to_string()],
            live_url: None,
            tags: vec!["ROS".to_string()],
            technologies: vec!["Rust".to_string(), "C++".to_string()],
            media: vec![MediaItem::image("https://cdn/a.png")],
            thumbnail_index: Some(0),
            featured: false,
            featured_order: 0,
            created_at: 10,
            updated_at: 10,
        }
    }

    // ========================================================================
    // Not configured
    // ========================================================================

    #[tokio::test]
    async fn test_every_operation_reports_not_configured() {
        let store = ProjectStorePostgres::new(None);

        assert_eq!(
            store.list(ProjectListFilter::default()).await,
            Err(ProjectStoreError::NotConfigured)
        );
        assert_eq!(store.get("p1").await, Err(ProjectStoreError::NotConfigured));
        assert_eq!(
            store.create(new_project()).await,
            Err(ProjectStoreError::NotConfigured)
        );
        assert_eq!(
            store.update("p1", ProjectPatch::default()).await,
            Err(ProjectStoreError::NotConfigured)
        );
        assert_eq!(store.delete("p1").await, Err(ProjectStoreError::NotConfigured));
    }

    // ========================================================================
    // Reads
    // ========================================================================

    #[tokio::test]
    async fn test_list_decodes_rows() {
        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
                create_mock_project_model("p2", 20),
                create_mock_project_model("p1", 10),
            ]]),
        );

        let projects = store.list(ProjectListFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "p2");
        assert_eq!(projects[0].technologies, vec!["Rust", "C++"]);
        assert_eq!(projects[0].media[0].media_type, MediaType::Image);
        assert_eq!(projects[0].thumbnail_index, Some(0));
    }

    #[tokio::test]
    async fn test_list_skips_undecodable_rows() {
        let mut broken = create_mock_project_model("broken", 30);
        broken.media = json!([{ "type": "hologram", "url": "x" }]);

        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
                broken,
                create_mock_project_model("ok", 10),
            ]]),
        );

        let projects = store.list(ProjectListFilter::default()).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "ok");
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()]),
        );

        assert_eq!(store.get("ghost").await, Ok(None));
    }

    #[tokio::test]
    async fn test_get_undecodable_project_is_absent() {
        let mut broken = create_mock_project_model("p1", 10);
        broken.tags = json!("not-a-list");

        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![broken]]),
        );

        assert_eq!(store.get("p1").await, Ok(None));
    }

    #[tokio::test]
    async fn test_negative_thumbnail_index_reads_as_absent() {
        let mut model = create_mock_project_model("p1", 10);
        model.thumbnail_index = Some(-1);

        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![model]]),
        );

        let project = store.get("p1").await.unwrap().unwrap();
        assert_eq!(project.thumbnail_index, None);
    }

    #[tokio::test]
    async fn test_database_errors_are_backend_errors() {
        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())]),
        );

        match store.list(ProjectListFilter::default()).await {
            Err(ProjectStoreError::Backend(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected Backend error, got {other:?}"),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    #[tokio::test]
    async fn test_create_returns_assigned_id() {
        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![create_mock_project_model("assigned", 10)]]),
        );

        assert_eq!(store.create(new_project()).await, Ok("assigned".to_string()));
    }

    #[tokio::test]
    async fn test_update_writes_patch() {
        let store = store_with(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }],
        ));

        let patch = ProjectPatch {
            featured: PatchField::Value(true),
            featured_order: PatchField::Value(3),
            live_url: PatchField::Null,
            ..Default::default()
        };

        assert_eq!(store.update("p1", patch).await, Ok(()));
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let store = store_with(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }],
        ));

        let patch = ProjectPatch {
            title: PatchField::Value("Renamed".to_string()),
            ..Default::default()
        };

        assert_eq!(
            store.update("ghost", patch).await,
            Err(ProjectStoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_empty_update_checks_existence() {
        let store = store_with(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<projects::Model>::new()]),
        );

        assert_eq!(
            store.update("ghost", ProjectPatch::default()).await,
            Err(ProjectStoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let store = store_with(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
            vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ],
        ));

        assert_eq!(store.delete("p1").await, Ok(()));
        assert_eq!(store.delete("p1").await, Err(ProjectStoreError::NotFound));
    }
}
