//! Data Transfer Objects

use rmcp::model::Tool;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Tool DTOs
// ============================================================================

/// 工具调用结果（成功与失败同为文本）
#[derive(Debug, Serialize)]
pub struct ToolOutput {
    pub tool: String,
    pub text: String,
}

/// 工具目录条目
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl From<Tool> for ToolDescriptor {
    fn from(tool: Tool) -> Self {
        Self {
            name: tool.name.to_string(),
            description: tool.description.unwrap_or_default().to_string(),
            input_schema: Value::Object(tool.input_schema.as_ref().clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToolCatalogResponse {
    pub tools: Vec<ToolDescriptor>,
}
