pub mod auth;
pub mod project;
pub mod resume;
pub mod uploads;
