//! Tool Service - 两个工具的宿主无关入口
//!
//! MCP 与 HTTP 宿主共用同一个实例，返回值永远是字符串

use std::sync::Arc;

use crate::application::commands::handlers::SynthesizeSpeechHandler;
use crate::application::commands::SynthesizeSpeech;
use crate::application::ports::{ApiKey, SpeechServicePort};
use crate::application::presenter::{render, render_outcome, render_voices, ToolOperation};
use crate::application::queries::handlers::ListVoicesHandler;
use crate::application::queries::ListVoices;

pub struct ToolService {
    list_voices_handler: ListVoicesHandler,
    synthesize_handler: SynthesizeSpeechHandler,
}

impl ToolService {
    /// 凭据与项目标识在构造时注入
    pub fn new(
        api_key: Option<ApiKey>,
        project_uuid: impl Into<String>,
        speech_service: Arc<dyn SpeechServicePort>,
    ) -> Self {
        Self {
            list_voices_handler: ListVoicesHandler::new(api_key.clone(), speech_service.clone()),
            synthesize_handler: SynthesizeSpeechHandler::new(api_key, project_uuid, speech_service),
        }
    }

    pub async fn list_voices(&self, query: ListVoices) -> String {
        let result = self.list_voices_handler.handle(query).await;
        render(ToolOperation::ListVoices, result, |voices| render_voices(voices))
    }

    pub async fn text_to_speech(&self, command: SynthesizeSpeech) -> String {
        let result = self.synthesize_handler.handle(command).await;
        render(ToolOperation::TextToSpeech, result, render_outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SynthesisResponse;
    use crate::infrastructure::adapters::{FakeReply, FakeSpeechService};
    use serde_json::json;

    fn service(fake: Arc<FakeSpeechService>) -> ToolService {
        ToolService::new(ApiKey::new("test-key"), "49a55388", fake)
    }

    #[tokio::test]
    async fn test_list_voices_flattens_errors() {
        let fake = Arc::new(FakeSpeechService::new());
        let text = service(fake.clone())
            .list_voices(ListVoices { page: 0, page_size: 10 })
            .await;
        assert!(text.starts_with("Error occurred while fetching voices: Page number must be at least 1"));
        assert_eq!(fake.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_list_voices_is_repeatable() {
        let fake = Arc::new(FakeSpeechService::new().with_voices(vec![
            FakeSpeechService::voice("Nova", "v-1", "synthetic"),
            FakeSpeechService::voice("Orion", "v-2", "professional"),
        ]));
        let service = service(fake.clone());
        let query = ListVoices { page: 1, page_size: 10 };

        let first = service.list_voices(query).await;
        let second = service.list_voices(query).await;
        assert_eq!(first, second);
        assert_eq!(fake.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_text_to_speech_success_text() {
        let fake = Arc::new(FakeSpeechService::new().with_synthesis(FakeReply::Ok(
            SynthesisResponse {
                title: Some("clip1".to_string()),
                duration: Some(2.3),
                audio_content_len: 10,
            },
        )));
        let text = service(fake)
            .text_to_speech(SynthesizeSpeech {
                voice_id: json!("v-1"),
                text: "hello".to_string(),
                sample_rate: json!(44100),
                encoding: "gzip".to_string(),
            })
            .await;
        assert!(text.contains("clip1"));
        assert!(text.contains("2.3"));
    }

    #[tokio::test]
    async fn test_text_to_speech_missing_key() {
        let fake = Arc::new(FakeSpeechService::new());
        let service = ToolService::new(None, "49a55388", fake.clone());
        let text = service
            .text_to_speech(SynthesizeSpeech {
                voice_id: json!("v-1"),
                text: "hello".to_string(),
                sample_rate: json!(44100),
                encoding: "gzip".to_string(),
            })
            .await;
        assert_eq!(
            text,
            "Error occurred during text-to-speech synthesis: Error loading API key."
        );
        assert_eq!(fake.total_calls(), 0);
    }
}
