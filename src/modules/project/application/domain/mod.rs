pub mod entities;
pub mod project_form;
