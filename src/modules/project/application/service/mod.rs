mod project_editor_service;
mod project_gateway_service;

pub use project_editor_service::ProjectEditorService;
pub use project_gateway_service::ProjectGatewayService;
