//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Voice Context: 音色列表分页与摘要
//! - Synthesis Context: 语音合成参数与结果

pub mod synthesis;
pub mod voice;
