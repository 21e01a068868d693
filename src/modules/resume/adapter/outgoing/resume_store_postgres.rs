use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::resumes::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::resume::application::domain::entities::{Resume, ResumeDomain, SourceType};
use crate::modules::resume::application::ports::outgoing::{
    NewResume, ResumePatch, ResumeStore, ResumeStoreError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Store Implementation
// ============================================================================

/// Resume collection backed by the `resumes` table.
#[derive(Clone)]
pub struct ResumeStorePostgres {
    db: Option<Arc<DatabaseConnection>>,
}

impl ResumeStorePostgres {
    pub fn new(db: Option<Arc<DatabaseConnection>>) -> Self {
        Self { db }
    }

    fn db(&self) -> Result<&DatabaseConnection, ResumeStoreError> {
        self.db.as_deref().ok_or(ResumeStoreError::NotConfigured)
    }
}

#[async_trait]
impl ResumeStore for ResumeStorePostgres {
    async fn list(&self) -> Result<Vec<Resume>, ResumeStoreError> {
        let rows = Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .all(self.db()?)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                model_to_resume(row)
                    .map_err(|e| warn!(resume_id = %id, "Skipping undecodable resume: {}", e))
                    .ok()
            })
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Resume>, ResumeStoreError> {
        let row = Entity::find_by_id(id.to_string())
            .one(self.db()?)
            .await
            .map_err(map_db_err)?;

        Ok(row.and_then(|row| {
            model_to_resume(row)
                .map_err(|e| warn!(resume_id = %id, "Stored resume is undecodable: {}", e))
                .ok()
        }))
    }

    async fn create(&self, resume: NewResume) -> Result<String, ResumeStoreError> {
        let db = self.db()?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(resume.title),
            domain: Set(resume.domain.label().to_string()),
            description: Set(resume.description),
            source_type: Set(resume.source_type.as_str().to_string()),
            file_url: Set(resume.file_url),
            file_name: Set(resume.file_name),
            updated_at: Set(resume.updated_at),
        };

        let inserted = model.insert(db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn update(&self, id: &str, patch: ResumePatch) -> Result<(), ResumeStoreError> {
        let db = self.db()?;

        if patch.is_empty() {
            return Entity::find_by_id(id.to_string())
                .one(db)
                .await
                .map_err(map_db_err)?
                .map(|_| ())
                .ok_or(ResumeStoreError::NotFound);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = patch.title {
            model.title = Set(title);
        }
        if let PatchField::Value(domain) = patch.domain {
            model.domain = Set(domain.label().to_string());
        }
        if let PatchField::Value(description) = patch.description {
            model.description = Set(description);
        }
        if let PatchField::Value(source_type) = patch.source_type {
            model.source_type = Set(source_type.as_str().to_string());
        }
        if let PatchField::Value(file_url) = patch.file_url {
            model.file_url = Set(file_url);
        }
        if let PatchField::Value(file_name) = patch.file_name {
            model.file_name = Set(file_name);
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
            return Err(ResumeStoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ResumeStoreError> {
        let result = Entity::delete_by_id(id.to_string())
            .exec(self.db()?)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResumeStoreError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_resume(model: resumes::Model) -> Result<Resume, ResumeStoreError> {
    let domain = ResumeDomain::from_label(&model.domain)
        .ok_or_else(|| ResumeStoreError::Decode(format!("unknown domain '{}'", model.domain)))?;
    let source_type = SourceType::parse(&model.source_type).ok_or_else(|| {
        ResumeStoreError::Decode(format!("unknown source type '{}'", model.source_type))
    })?;

    Ok(Resume {
        id: model.id,
        title: model.title,
        domain,
        description: model.description,
        source_type,
        file_url: model.file_url,
        file_name: model.file_name,
        updated_at: model.updated_at,
    })
}

fn map_db_err(e: DbErr) -> ResumeStoreError {
    ResumeStoreError::Backend(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
