//! Tool Parameters - 工具参数及其 JSON Schema
//!
//! 同时被 MCP 与 HTTP 宿主使用

use rmcp::schemars;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::application::{ListVoices, SynthesizeSpeech};

/// list_voices 参数
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ListVoicesParams {
    /// The page number to fetch (starts from 1)
    #[serde(deserialize_with = "lenient_i64")]
    pub page: i64,
    /// Number of items per page (10 to 1000)
    #[serde(deserialize_with = "lenient_i64")]
    pub page_size: i64,
}

/// 接受 JSON 整数、小数部分为 0 的浮点数、以及内容为整数的字符串
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let parsed = match &raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", raw)))
}

impl From<ListVoicesParams> for ListVoices {
    fn from(params: ListVoicesParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
        }
    }
}

/// text_to_speech 参数
///
/// 兼容旧参数名 voice_uuid / data / accept_encoding
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct TextToSpeechParams {
    /// Id of the voice to use (string or number)
    #[serde(alias = "voice_uuid")]
    pub voice_id: Value,
    /// The text to convert to speech (at most 3000 characters)
    #[serde(alias = "data")]
    pub text: String,
    /// Output sample rate: 8000, 16000, 22050, 32000, 44100 or 48000
    pub sample_rate: Value,
    /// Accept-Encoding request header: gzip, deflate or br
    #[serde(alias = "accept_encoding")]
    pub encoding: String,
}

impl From<TextToSpeechParams> for SynthesizeSpeech {
    fn from(params: TextToSpeechParams) -> Self {
        Self {
            voice_id: params.voice_id,
            text: params.text,
            sample_rate: params.sample_rate,
            encoding: params.encoding,
        }
    }
}
