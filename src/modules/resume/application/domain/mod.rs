pub mod download;
pub mod entities;
pub mod resume_form;
