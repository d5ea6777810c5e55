//! Tool HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::ToolOperation;
use crate::infrastructure::http::dto::{ApiResponse, ToolCatalogResponse, ToolOutput};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;
use crate::infrastructure::mcp::{ListVoicesParams, TextToSpeechParams};

/// 列出工具目录
pub async fn list_tools(State(state): State<Arc<AppState>>) -> Json<ApiResponse<ToolCatalogResponse>> {
    Json(ApiResponse::success(ToolCatalogResponse {
        tools: state.catalog.clone(),
    }))
}

/// 按名称调用工具
pub async fn call_tool(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> Result<Json<ApiResponse<ToolOutput>>, ApiError> {
    let operation = match name.as_str() {
        "list_voices" => ToolOperation::ListVoices,
        "text_to_speech" => ToolOperation::TextToSpeech,
        _ => return Err(ApiError::NotFound(format!("Unknown tool: {}", name))),
    };

    tracing::debug!(tool = operation.name(), "HTTP tool call");

    let text = match operation {
        ToolOperation::ListVoices => {
            let params: ListVoicesParams = serde_json::from_value(arguments)?;
            state.tool_service.list_voices(params.into()).await
        }
        ToolOperation::TextToSpeech => {
            let params: TextToSpeechParams = serde_json::from_value(arguments)?;
            state.tool_service.text_to_speech(params.into()).await
        }
    };

    Ok(Json(ApiResponse::success(ToolOutput {
        tool: operation.name().to_string(),
        text,
    })))
}
