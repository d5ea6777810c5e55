//! Presenter - 把处理结果展开为宿主可显示的文本
//!
//! 成功与失败走同一个字符串通道，只有这里负责展开

use crate::application::error::ToolError;
use crate::domain::synthesis::SynthesisOutcome;
use crate::domain::voice::VoiceSummary;

/// 音色之间的分隔符
pub const VOICE_SEPARATOR: &str = "\n\n----------\n\n";

/// 工具操作，决定错误前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOperation {
    ListVoices,
    TextToSpeech,
}

impl ToolOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListVoices => "list_voices",
            Self::TextToSpeech => "text_to_speech",
        }
    }

    pub fn error_prefix(&self) -> &'static str {
        match self {
            Self::ListVoices => "Error occurred while fetching voices",
            Self::TextToSpeech => "Error occurred during text-to-speech synthesis",
        }
    }
}

pub fn render_voices(voices: &[VoiceSummary]) -> String {
    voices
        .iter()
        .map(|voice| voice.to_string())
        .collect::<Vec<_>>()
        .join(VOICE_SEPARATOR)
}

pub fn render_outcome(outcome: &SynthesisOutcome) -> String {
    let first = match outcome.duration {
        Some(duration) => format!(
            "The title of this recording was {} and it ran for {} seconds.",
            outcome.title, duration
        ),
        None => format!(
            "The title of this recording was {} and its duration was not reported.",
            outcome.title
        ),
    };
    format!(
        "{}\nCheck your projects section in Resemble to see the recording!",
        first
    )
}

pub fn render_error(operation: ToolOperation, err: &ToolError) -> String {
    format!("{}: {}", operation.error_prefix(), err)
}

/// 展开处理结果，失败时记录日志
pub fn render<T>(
    operation: ToolOperation,
    result: Result<T, ToolError>,
    on_success: impl FnOnce(&T) -> String,
) -> String {
    match result {
        Ok(value) => on_success(&value),
        Err(err) => {
            tracing::warn!(
                tool = operation.name(),
                kind = err.kind(),
                error = %err,
                "Tool call failed"
            );
            render_error(operation, &err)
        }
    }
}
