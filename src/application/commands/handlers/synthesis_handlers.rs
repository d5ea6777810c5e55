//! Synthesis Command Handlers

use std::sync::Arc;

use crate::application::commands::SynthesizeSpeech;
use crate::application::error::ToolError;
use crate::application::ports::{ApiKey, SpeechServiceError, SpeechServicePort};
use crate::domain::synthesis::{
    coerce_sample_rate, coerce_voice_id, AcceptEncoding, SampleRate, SynthesisOutcome,
    SynthesisRequest, SynthesisText,
};

const REQUEST_FAILED: &str = "Text to speech request failed.";

/// SynthesizeSpeech Handler
///
/// 校验顺序：凭据 → 音色标识转换 → 文本长度 → 采样率 → 编码。
/// 全部通过后才发起一次合成请求；音频本体被丢弃，只返回元数据。
pub struct SynthesizeSpeechHandler {
    api_key: Option<ApiKey>,
    project_uuid: String,
    speech_service: Arc<dyn SpeechServicePort>,
}

impl SynthesizeSpeechHandler {
    pub fn new(
        api_key: Option<ApiKey>,
        project_uuid: impl Into<String>,
        speech_service: Arc<dyn SpeechServicePort>,
    ) -> Self {
        Self {
            api_key,
            project_uuid: project_uuid.into(),
            speech_service,
        }
    }

    /// 把原始参数校验为合成请求
    pub fn validate(&self, command: SynthesizeSpeech) -> Result<SynthesisRequest, ToolError> {
        let voice_uuid = coerce_voice_id(&command.voice_id)?;
        let text = SynthesisText::new(command.text)?;
        let sample_rate = SampleRate::new(coerce_sample_rate(&command.sample_rate)?)?;
        let encoding = command.encoding.parse::<AcceptEncoding>()?;

        Ok(SynthesisRequest {
            voice_uuid,
            project_uuid: self.project_uuid.clone(),
            text,
            sample_rate,
            encoding,
        })
    }

    pub async fn handle(&self, command: SynthesizeSpeech) -> Result<SynthesisOutcome, ToolError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(ToolError::missing_credential)?;
        let request = self.validate(command)?;

        tracing::debug!(
            voice_uuid = %request.voice_uuid,
            sample_rate = request.sample_rate.hz(),
            encoding = %request.encoding,
            text_chars = request.text.as_str().chars().count(),
            "Submitting synthesis request"
        );

        let response = self
            .speech_service
            .synthesize(api_key, &request)
            .await
            .map_err(synthesis_error)?;

        tracing::debug!(audio_content_len = response.audio_content_len, "Audio payload discarded");
        tracing::info!(
            title = ?response.title,
            duration = ?response.duration,
            "Synthesis completed"
        );

        Ok(SynthesisOutcome::new(response.title, response.duration))
    }
}

/// 状态码失败与传输/解析失败是两类不同的说明
fn synthesis_error(err: SpeechServiceError) -> ToolError {
    match err {
        SpeechServiceError::Status { status, .. } => {
            tracing::warn!(status, "Synthesis rejected by remote service");
            ToolError::remote(REQUEST_FAILED)
        }
        SpeechServiceError::InvalidResponse(_) => ToolError::malformed(format!(
            "Error making post request to Resemble: {}",
            err
        )),
        other => ToolError::remote(format!("Error making post request to Resemble: {}", other)),
    }
}
