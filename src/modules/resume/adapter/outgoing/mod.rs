mod http_document_fetcher;
mod resume_store_postgres;
pub mod sea_orm_entity;

pub use http_document_fetcher::HttpDocumentFetcher;
pub use resume_store_postgres::ResumeStorePostgres;
