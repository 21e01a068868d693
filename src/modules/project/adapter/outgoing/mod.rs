mod project_store_postgres;
pub mod sea_orm_entity;

pub use project_store_postgres::ProjectStorePostgres;
