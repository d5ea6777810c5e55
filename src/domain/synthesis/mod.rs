//! Synthesis Context - 语音合成限界上下文
//!
//! 职责:
//! - 文本长度、采样率、编码的校验
//! - 工具参数的类型转换
//! - 合成结果元数据

mod aggregate;
mod coerce;
mod errors;
mod value_objects;

pub use aggregate::{SynthesisOutcome, SynthesisRequest, OUTPUT_FORMAT, UNKNOWN_TITLE};
pub use coerce::{coerce_sample_rate, coerce_voice_id};
pub use errors::SynthesisError;
pub use value_objects::{AcceptEncoding, SampleRate, SynthesisText, VoiceUuid};
