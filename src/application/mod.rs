//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechService、ApiKey）
//! - commands: 语音合成命令及处理器
//! - queries: 音色列表查询及处理器
//! - presenter: 结果展开为宿主文本
//! - tool_service: 两个工具的统一入口
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod queries;
pub mod tool_service;

// Re-exports
pub use commands::{handlers::SynthesizeSpeechHandler, SynthesizeSpeech};

pub use error::ToolError;

pub use ports::{
    ApiKey, SpeechServiceError, SpeechServicePort, SynthesisResponse, VoiceListing, VoiceRecord,
};

pub use presenter::{render_error, render_outcome, render_voices, ToolOperation, VOICE_SEPARATOR};

pub use queries::{handlers::ListVoicesHandler, ListVoices};

pub use tool_service::ToolService;
