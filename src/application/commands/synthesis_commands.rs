//! Synthesis Commands

use serde_json::Value;

/// 语音合成命令（未校验的原始参数）
///
/// voice_id 和 sample_rate 保留为 JSON 值，由处理器显式转换
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeSpeech {
    pub voice_id: Value,
    pub text: String,
    pub sample_rate: Value,
    pub encoding: String,
}
