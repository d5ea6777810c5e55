//! Resemble 客户端端到端测试：ToolService + ResembleClient 对接 wiremock

use std::sync::Arc;
use std::time::Duration;

use resemble_mcp::application::ports::ApiKey;
use resemble_mcp::application::{ListVoices, SynthesizeSpeech, ToolService};
use resemble_mcp::infrastructure::adapters::{ResembleClient, ResembleClientConfig};
use serde_json::{json, Value};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "49a55388";

fn tool_service(server: &MockServer) -> ToolService {
    tool_service_with(ResembleClientConfig::with_base_url(server.uri()))
}

fn tool_service_with(config: ResembleClientConfig) -> ToolService {
    let client = ResembleClient::new(config).unwrap();
    ToolService::new(ApiKey::new("secret-key"), PROJECT, Arc::new(client))
}

fn tts(voice_id: Value, text: &str, sample_rate: Value, encoding: &str) -> SynthesizeSpeech {
    SynthesizeSpeech {
        voice_id,
        text: text.to_string(),
        sample_rate,
        encoding: encoding.to_string(),
    }
}

#[tokio::test]
async fn list_voices_single_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "page": 1,
            "items": [{"name": "Nova", "uuid": "v-1", "voice_type": "synthetic", "dataset_url": null}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 1, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Voice Model Name: Nova\nVoice Model ID: v-1\nVoice Type: synthetic"
    );
    assert!(!text.contains("----------"));
}

#[tokio::test]
async fn list_voices_joins_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"name": "Nova", "uuid": "v-1", "voice_type": "synthetic"},
                {"name": "Orion", "uuid": "v-2", "voice_type": "professional"}
            ]
        })))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 2, page_size: 50 })
        .await;

    let blocks: Vec<&str> = text.split("\n\n----------\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].starts_with("Voice Model Name: Orion"));
}

#[tokio::test]
async fn list_voices_forwards_large_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .and(query_param("page", "4294967296"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 4_294_967_296, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Error occurred while fetching voices: No formatted voices found for the given parameters."
    );
}

#[tokio::test]
async fn list_voices_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"name": "Nova", "uuid": "v-1", "voice_type": "synthetic"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let service = tool_service(&server);
    let query = ListVoices { page: 1, page_size: 10 };
    assert_eq!(service.list_voices(query).await, service.list_voices(query).await);
}

#[tokio::test]
async fn list_voices_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 99, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Error occurred while fetching voices: No formatted voices found for the given parameters."
    );
}

#[tokio::test]
async fn list_voices_null_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 1, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Error occurred while fetching voices: Failed to retrieve voices or no voices found from Resemble models."
    );
}

#[tokio::test]
async fn list_voices_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"success": false, "message": "Invalid token"})),
        )
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 1, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Error occurred while fetching voices: Voice listing request failed with status 401: Invalid token"
    );
}

#[tokio::test]
async fn list_voices_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"name": "Nova", "uuid": "v-1", "voice_type": "synthetic"},
                {"name": "Orion", "voice_type": "synthetic"}
            ]
        })))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .list_voices(ListVoices { page: 1, page_size: 10 })
        .await;

    assert_eq!(
        text,
        "Error occurred while fetching voices: Voice at index 1 is missing field 'uuid'."
    );
}

#[tokio::test]
async fn list_voices_validation_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = tool_service(&server);

    let text = service.list_voices(ListVoices { page: 0, page_size: 10 }).await;
    assert_eq!(
        text,
        "Error occurred while fetching voices: Page number must be at least 1."
    );

    for page_size in [9, 1001] {
        let text = service.list_voices(ListVoices { page: 1, page_size }).await;
        assert_eq!(
            text,
            "Error occurred while fetching voices: Page size must be between 10 and 1000 (inclusive)."
        );
    }
}

#[tokio::test]
async fn text_to_speech_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(header("authorization", "Bearer secret-key"))
        .and(header("accept-encoding", "gzip"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "voice_uuid": "v-1",
            "project_uuid": PROJECT,
            "data": "Hello there",
            "sample_rate": 44100,
            "output_format": "wav"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "title": "clip1",
            "duration": 2.3,
            "audio_content": "UklGRiQAAABXQVZFZm10"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .text_to_speech(tts(json!(" v-1 "), "Hello there", json!(44100), "gzip"))
        .await;

    assert_eq!(
        text,
        "The title of this recording was clip1 and it ran for 2.3 seconds.\n\
         Check your projects section in Resemble to see the recording!"
    );
    assert!(!text.contains("UklGR"));
}

#[tokio::test]
async fn text_to_speech_coerces_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(header("accept-encoding", "br"))
        .and(body_json(json!({
            "voice_uuid": "12345",
            "project_uuid": PROJECT,
            "data": "hi",
            "sample_rate": 22050,
            "output_format": "wav"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .text_to_speech(tts(json!(12345), "hi", json!("22050"), "br"))
        .await;

    assert!(text.starts_with("The title of this recording was Unknown Title and its duration was not reported."));
}

#[tokio::test]
async fn text_to_speech_server_error_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream exploded</html>"))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .text_to_speech(tts(json!("v-1"), "hi", json!(16000), "deflate"))
        .await;

    assert_eq!(
        text,
        "Error occurred during text-to-speech synthesis: Text to speech request failed."
    );
}

#[tokio::test]
async fn text_to_speech_unparseable_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let text = tool_service(&server)
        .text_to_speech(tts(json!("v-1"), "hi", json!(16000), "gzip"))
        .await;

    assert!(text.starts_with(
        "Error occurred during text-to-speech synthesis: Error making post request to Resemble:"
    ));
}

#[tokio::test]
async fn text_to_speech_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"title": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let service = tool_service_with(ResembleClientConfig::with_base_url(server.uri()).with_timeout(1));
    let text = service
        .text_to_speech(tts(json!("v-1"), "hi", json!(16000), "gzip"))
        .await;

    assert!(text.starts_with(
        "Error occurred during text-to-speech synthesis: Error making post request to Resemble:"
    ));
}

#[tokio::test]
async fn text_to_speech_validation_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = tool_service(&server);
    let prefix = "Error occurred during text-to-speech synthesis: ";

    let text = service
        .text_to_speech(tts(json!("v-1"), &"a".repeat(3001), json!(44100), "gzip"))
        .await;
    assert_eq!(text, format!("{}Text length exceeds 3000 characters limit.", prefix));

    let text = service
        .text_to_speech(tts(json!("v-1"), "hi", json!(11025), "gzip"))
        .await;
    assert_eq!(
        text,
        format!(
            "{}Invalid sample rate. Must be one of [8000, 16000, 22050, 32000, 44100, 48000].",
            prefix
        )
    );

    let text = service
        .text_to_speech(tts(json!("v-1"), "hi", json!(44100), "zstd"))
        .await;
    assert_eq!(
        text,
        format!("{}Invalid encoding. Must be one of [gzip, deflate, br].", prefix)
    );

    let text = service
        .text_to_speech(tts(json!(null), "hi", json!(44100), "gzip"))
        .await;
    assert_eq!(text, format!("{}Voice id must be a string or number.", prefix));
}

#[tokio::test]
async fn missing_credential_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ResembleClient::new(ResembleClientConfig::with_base_url(server.uri())).unwrap();
    let service = ToolService::new(ApiKey::new("   "), PROJECT, Arc::new(client));

    assert_eq!(
        service.list_voices(ListVoices { page: 1, page_size: 10 }).await,
        "Error occurred while fetching voices: Error loading API key."
    );
    assert_eq!(
        service
            .text_to_speech(tts(json!("v-1"), "hi", json!(44100), "gzip"))
            .await,
        "Error occurred during text-to-speech synthesis: Error loading API key."
    );
}
