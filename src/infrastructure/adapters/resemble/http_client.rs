//! Resemble HTTP Client - 调用 Resemble AI 的 HTTP 接口
//!
//! 实现 SpeechServicePort trait
//!
//! 外部 API:
//! GET  https://app.resemble.ai/api/v2/voices?page=1&page_size=10
//! POST https://f.cluster.resemble.ai/synthesize
//! Request: {"voice_uuid": "...", "project_uuid": "...", "data": "...", "sample_rate": 44100, "output_format": "wav"}
//! Response: {"title": "...", "duration": 2.3, "audio_content": "<base64>", ...}

use async_trait::async_trait;
use reqwest::header::ACCEPT_ENCODING;
use reqwest::Client;
use std::time::Duration;

use super::dto::{SynthesizeRequestDto, SynthesizeResponseDto, VoiceListingDto};
use crate::application::ports::{
    ApiKey, SpeechServiceError, SpeechServicePort, SynthesisResponse, VoiceListing,
};
use crate::domain::synthesis::SynthesisRequest;
use crate::domain::voice::VoiceQuery;

pub const DEFAULT_VOICES_URL: &str = "https://app.resemble.ai/api/v2/voices";
pub const DEFAULT_SYNTHESIZE_URL: &str = "https://f.cluster.resemble.ai/synthesize";

/// Resemble 客户端配置
#[derive(Debug, Clone)]
pub struct ResembleClientConfig {
    /// 音色列表 URL
    pub voices_url: String,
    /// 同步合成 URL
    pub synthesize_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 建连超时时间（秒）
    pub connect_timeout_secs: u64,
}

impl Default for ResembleClientConfig {
    fn default() -> Self {
        Self {
            voices_url: DEFAULT_VOICES_URL.to_string(),
            synthesize_url: DEFAULT_SYNTHESIZE_URL.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl ResembleClientConfig {
    /// 以同一个 base URL 提供两个接口（测试替身使用）
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            voices_url: format!("{}/api/v2/voices", base),
            synthesize_url: format!("{}/synthesize", base),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Resemble HTTP 客户端
pub struct ResembleClient {
    client: Client,
    config: ResembleClientConfig,
}

impl ResembleClient {
    /// 创建新的客户端
    pub fn new(config: ResembleClientConfig) -> Result<Self, SpeechServiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| SpeechServiceError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

fn transport_error(e: reqwest::Error) -> SpeechServiceError {
    if e.is_timeout() {
        SpeechServiceError::Timeout
    } else if e.is_connect() {
        SpeechServiceError::NetworkError(format!("Cannot connect to Resemble: {}", e))
    } else {
        SpeechServiceError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl SpeechServicePort for ResembleClient {
    async fn list_voices(
        &self,
        api_key: &ApiKey,
        query: &VoiceQuery,
    ) -> Result<Option<VoiceListing>, SpeechServiceError> {
        tracing::debug!(
            url = %self.config.voices_url,
            page = query.page(),
            page_size = query.page_size(),
            "Sending voice listing request"
        );

        let response = self
            .client
            .get(&self.config.voices_url)
            .bearer_auth(api_key.expose())
            .query(&[("page", query.page()), ("page_size", query.page_size())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SpeechServiceError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            // 远程的错误体里通常带 message
            let message = serde_json::from_str::<VoiceListingDto>(&body)
                .ok()
                .and_then(|dto| dto.message);
            return Err(SpeechServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        let dto: Option<VoiceListingDto> = serde_json::from_str(&body)
            .map_err(|e| SpeechServiceError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            items = ?dto.as_ref().and_then(|d| d.items.as_ref()).map(|i| i.len()),
            "Voice listing received"
        );

        Ok(dto.map(VoiceListing::from))
    }

    async fn synthesize(
        &self,
        api_key: &ApiKey,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechServiceError> {
        let body = SynthesizeRequestDto::from(request);

        tracing::debug!(
            url = %self.config.synthesize_url,
            voice_uuid = body.voice_uuid,
            sample_rate = body.sample_rate,
            encoding = request.encoding.as_str(),
            "Sending synthesis request"
        );

        // json() 同时设置 Content-Type: application/json
        let response = self
            .client
            .post(&self.config.synthesize_url)
            .bearer_auth(api_key.expose())
            .header(ACCEPT_ENCODING, request.encoding.as_str())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        // 状态码优先于响应体
        let status = response.status();
        if !status.is_success() {
            return Err(SpeechServiceError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        let dto: SynthesizeResponseDto = response
            .json()
            .await
            .map_err(|e| SpeechServiceError::InvalidResponse(e.to_string()))?;

        Ok(SynthesisResponse::from(dto))
    }
}
