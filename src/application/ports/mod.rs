//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod credential;
mod speech_service;

pub use credential::ApiKey;
pub use speech_service::{
    SpeechServiceError, SpeechServicePort, SynthesisResponse, VoiceListing, VoiceRecord,
};
