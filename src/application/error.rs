//! 应用层错误定义
//!
//! 两个工具共用的错误分类，只在宿主边界被展开为文本

use thiserror::Error;

use crate::domain::synthesis::SynthesisError;
use crate::domain::voice::VoiceError;

/// 工具调用错误
///
/// Display 只输出说明本身，前缀由 presenter 按工具添加
#[derive(Debug, Error)]
pub enum ToolError {
    /// 缺少凭据
    #[error("{0}")]
    Configuration(String),

    /// 参数越界、不在枚举内或无法转换
    #[error("{0}")]
    Validation(String),

    /// 非成功状态码或传输失败
    #[error("{0}")]
    RemoteUnavailable(String),

    /// 成功响应中缺少可用字段
    #[error("{0}")]
    MalformedResponse(String),
}

impl ToolError {
    /// 凭据缺失
    pub fn missing_credential() -> Self {
        Self::Configuration("Error loading API key.".to_string())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 创建远程不可用错误
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteUnavailable(message.into())
    }

    /// 创建响应格式错误
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// 错误类别（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::RemoteUnavailable(_) => "remote_unavailable",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<VoiceError> for ToolError {
    fn from(err: VoiceError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SynthesisError> for ToolError {
    fn from(err: SynthesisError) -> Self {
        Self::Validation(err.to_string())
    }
}
