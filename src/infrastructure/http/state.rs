//! Application State

use std::sync::Arc;

use crate::application::ToolService;
use crate::infrastructure::http::dto::ToolDescriptor;
use crate::infrastructure::mcp::SpeechToolServer;

/// 应用状态
pub struct AppState {
    pub tool_service: Arc<ToolService>,
    /// 工具目录，与 MCP 宿主公布的一致
    pub catalog: Vec<ToolDescriptor>,
    /// 启动时是否读到了 API Key
    pub credential_configured: bool,
}

impl AppState {
    pub fn new(tool_service: Arc<ToolService>, credential_configured: bool) -> Self {
        Self {
            tool_service,
            catalog: SpeechToolServer::tool_catalog()
                .into_iter()
                .map(ToolDescriptor::from)
                .collect(),
            credential_configured,
        }
    }
}
