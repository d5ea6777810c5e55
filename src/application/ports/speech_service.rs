//! Speech Service Port - 远程语音服务抽象
//!
//! 定义音色列表与语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use super::ApiKey;
use crate::domain::synthesis::SynthesisRequest;
use crate::domain::voice::VoiceQuery;

/// 远程服务错误
#[derive(Debug, Error)]
pub enum SpeechServiceError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 非 2xx 状态码，message 为远程返回的说明（如果有）
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 远程音色条目
///
/// 字段全部可选，是否可用由调用方判定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceRecord {
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub voice_type: Option<String>,
}

/// 远程音色列表响应
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceListing {
    /// 远程的 success 标记（未返回时为 None）
    pub success: Option<bool>,
    /// 远程的说明信息
    pub message: Option<String>,
    /// 音色条目，远程未返回 items 时为 None
    pub items: Option<Vec<VoiceRecord>>,
}

/// 远程合成响应
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisResponse {
    pub title: Option<String>,
    /// 时长（秒）
    pub duration: Option<f64>,
    /// base64 音频的长度（只用于日志，音频本体不保留）
    pub audio_content_len: usize,
}

/// Speech Service Port
///
/// 外部语音服务的抽象接口
#[async_trait]
pub trait SpeechServicePort: Send + Sync {
    /// 获取一页音色
    ///
    /// 响应体为空或为 null 时返回 `Ok(None)`
    async fn list_voices(
        &self,
        api_key: &ApiKey,
        query: &VoiceQuery,
    ) -> Result<Option<VoiceListing>, SpeechServiceError>;

    /// 提交一次同步合成
    async fn synthesize(
        &self,
        api_key: &ApiKey,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechServiceError>;
}
