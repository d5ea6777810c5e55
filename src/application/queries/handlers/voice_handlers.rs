//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ToolError;
use crate::application::ports::{ApiKey, SpeechServiceError, SpeechServicePort, VoiceRecord};
use crate::application::queries::ListVoices;
use crate::domain::voice::{VoiceQuery, VoiceSummary};

const NO_VOICES_FOUND: &str = "Failed to retrieve voices or no voices found from Resemble models.";
const NO_FORMATTED_VOICES: &str = "No formatted voices found for the given parameters.";

/// ListVoices Handler
///
/// 校验顺序：凭据 → 页码 → 页大小，任何一步失败都不会发起远程调用
pub struct ListVoicesHandler {
    api_key: Option<ApiKey>,
    speech_service: Arc<dyn SpeechServicePort>,
}

impl ListVoicesHandler {
    pub fn new(api_key: Option<ApiKey>, speech_service: Arc<dyn SpeechServicePort>) -> Self {
        Self {
            api_key,
            speech_service,
        }
    }

    pub async fn handle(&self, query: ListVoices) -> Result<Vec<VoiceSummary>, ToolError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(ToolError::missing_credential)?;
        let query = VoiceQuery::new(query.page, query.page_size)?;

        tracing::debug!(
            page = query.page(),
            page_size = query.page_size(),
            "Fetching voices"
        );

        let listing = self
            .speech_service
            .list_voices(api_key, &query)
            .await
            .map_err(listing_error)?
            .ok_or_else(|| ToolError::remote(NO_VOICES_FOUND))?;

        if listing.success == Some(false) {
            return Err(ToolError::remote(
                listing
                    .message
                    .unwrap_or_else(|| "Resemble reported an unsuccessful voice listing.".to_string()),
            ));
        }

        let items = listing
            .items
            .ok_or_else(|| ToolError::remote(NO_VOICES_FOUND))?;

        // 任一条目缺字段则整体失败，不返回部分结果
        let voices = items
            .into_iter()
            .enumerate()
            .map(|(index, record)| summarize(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        if voices.is_empty() {
            return Err(ToolError::malformed(NO_FORMATTED_VOICES));
        }

        tracing::info!(count = voices.len(), page = query.page(), "Voices fetched");
        Ok(voices)
    }
}

fn summarize(index: usize, record: VoiceRecord) -> Result<VoiceSummary, ToolError> {
    let missing =
        |field: &str| ToolError::malformed(format!("Voice at index {} is missing field '{}'.", index, field));

    Ok(VoiceSummary {
        name: record.name.ok_or_else(|| missing("name"))?,
        id: record.uuid.ok_or_else(|| missing("uuid"))?,
        voice_type: record.voice_type.ok_or_else(|| missing("voice_type"))?,
    })
}

fn listing_error(err: SpeechServiceError) -> ToolError {
    match err {
        SpeechServiceError::Status { status, message } => match message {
            Some(message) => ToolError::remote(format!(
                "Voice listing request failed with status {}: {}",
                status, message
            )),
            None => ToolError::remote(format!(
                "Voice listing request failed with status {}.",
                status
            )),
        },
        SpeechServiceError::InvalidResponse(msg) => {
            ToolError::malformed(format!("Invalid voice listing response: {}", msg))
        }
        other => ToolError::remote(format!("Error making request to Resemble: {}", other)),
    }
}
