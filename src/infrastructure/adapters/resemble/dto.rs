//! Resemble API 报文结构

use serde::{Deserialize, Serialize};

use crate::application::ports::{SynthesisResponse, VoiceListing, VoiceRecord};
use crate::domain::synthesis::SynthesisRequest;

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
pub struct SynthesizeRequestDto<'a> {
    pub voice_uuid: &'a str,
    pub project_uuid: &'a str,
    /// 要合成的文本
    pub data: &'a str,
    pub sample_rate: u32,
    pub output_format: &'a str,
}

impl<'a> From<&'a SynthesisRequest> for SynthesizeRequestDto<'a> {
    fn from(request: &'a SynthesisRequest) -> Self {
        Self {
            voice_uuid: request.voice_uuid.as_str(),
            project_uuid: &request.project_uuid,
            data: request.text.as_str(),
            sample_rate: request.sample_rate.hz(),
            output_format: request.output_format(),
        }
    }
}

/// 合成响应体
///
/// 其余字段（audio_timestamps、issues 等）忽略
#[derive(Debug, Deserialize)]
pub struct SynthesizeResponseDto {
    pub title: Option<String>,
    pub duration: Option<f64>,
    /// base64 音频，只取长度
    pub audio_content: Option<String>,
}

impl From<SynthesizeResponseDto> for SynthesisResponse {
    fn from(dto: SynthesizeResponseDto) -> Self {
        Self {
            title: dto.title,
            duration: dto.duration,
            audio_content_len: dto.audio_content.map(|a| a.len()).unwrap_or(0),
        }
    }
}

/// 音色列表响应体
#[derive(Debug, Deserialize)]
pub struct VoiceListingDto {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub items: Option<Vec<VoiceItemDto>>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceItemDto {
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub voice_type: Option<String>,
}

impl From<VoiceItemDto> for VoiceRecord {
    fn from(dto: VoiceItemDto) -> Self {
        Self {
            name: dto.name,
            uuid: dto.uuid,
            voice_type: dto.voice_type,
        }
    }
}

impl From<VoiceListingDto> for VoiceListing {
    fn from(dto: VoiceListingDto) -> Self {
        Self {
            success: dto.success,
            message: dto.message,
            items: dto
                .items
                .map(|items| items.into_iter().map(VoiceRecord::from).collect()),
        }
    }
}
