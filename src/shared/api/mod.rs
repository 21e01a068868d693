pub mod json_config;
pub mod response;
pub mod sse;

pub use json_config::custom_json_config;
pub use response::ApiResponse;
