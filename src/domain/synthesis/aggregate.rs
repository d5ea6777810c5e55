//! Synthesis Context - 合成请求与结果

use super::{AcceptEncoding, SampleRate, SynthesisText, VoiceUuid};

/// 固定的输出格式
pub const OUTPUT_FORMAT: &str = "wav";

/// 缺少标题时使用的占位符
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// 已通过校验的合成请求
///
/// 只能由合法的值对象组装，因此构造完成即满足所有参数约束
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub voice_uuid: VoiceUuid,
    pub project_uuid: String,
    pub text: SynthesisText,
    pub sample_rate: SampleRate,
    pub encoding: AcceptEncoding,
}

impl SynthesisRequest {
    pub fn output_format(&self) -> &'static str {
        OUTPUT_FORMAT
    }
}

/// 合成结果的描述性元数据
///
/// 音频本体（base64）不在这里出现
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOutcome {
    pub title: String,
    /// 时长（秒），远程未返回时保持为空
    pub duration: Option<f64>,
}

impl SynthesisOutcome {
    pub fn new(title: Option<String>, duration: Option<f64>) -> Self {
        Self {
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            duration,
        }
    }
}
