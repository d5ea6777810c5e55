//! Fake Speech Service - 用于测试的远程服务替身
//!
//! 返回预设的响应并记录调用次数，不发起任何网络请求

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    ApiKey, SpeechServiceError, SpeechServicePort, SynthesisResponse, VoiceListing, VoiceRecord,
};
use crate::domain::synthesis::SynthesisRequest;
use crate::domain::voice::VoiceQuery;

/// 预设的远程响应
#[derive(Debug, Clone)]
pub enum FakeReply<T> {
    Ok(T),
    Status(u16, Option<String>),
    Network(String),
    Invalid(String),
}

impl<T: Clone> FakeReply<T> {
    fn to_result(&self) -> Result<T, SpeechServiceError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status, message) => Err(SpeechServiceError::Status {
                status: *status,
                message: message.clone(),
            }),
            Self::Network(msg) => Err(SpeechServiceError::NetworkError(msg.clone())),
            Self::Invalid(msg) => Err(SpeechServiceError::InvalidResponse(msg.clone())),
        }
    }
}

/// Fake Speech Service
pub struct FakeSpeechService {
    listing: FakeReply<Option<VoiceListing>>,
    synthesis: FakeReply<SynthesisResponse>,
    list_calls: AtomicUsize,
    synthesize_calls: AtomicUsize,
    last_query: Mutex<Option<VoiceQuery>>,
    last_request: Mutex<Option<SynthesisRequest>>,
}

impl Default for FakeSpeechService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeSpeechService {
    /// 默认：空音色列表，合成返回空元数据
    pub fn new() -> Self {
        Self {
            listing: FakeReply::Ok(Some(VoiceListing {
                success: Some(true),
                message: None,
                items: Some(Vec::new()),
            })),
            synthesis: FakeReply::Ok(SynthesisResponse::default()),
            list_calls: AtomicUsize::new(0),
            synthesize_calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
            last_request: Mutex::new(None),
        }
    }

    /// 构造一个字段完整的音色条目
    pub fn voice(name: &str, uuid: &str, voice_type: &str) -> VoiceRecord {
        VoiceRecord {
            name: Some(name.to_string()),
            uuid: Some(uuid.to_string()),
            voice_type: Some(voice_type.to_string()),
        }
    }

    pub fn with_voices(self, voices: Vec<VoiceRecord>) -> Self {
        self.with_listing(FakeReply::Ok(Some(VoiceListing {
            success: Some(true),
            message: None,
            items: Some(voices),
        })))
    }

    pub fn with_listing(mut self, listing: FakeReply<Option<VoiceListing>>) -> Self {
        self.listing = listing;
        self
    }

    pub fn with_synthesis(mut self, synthesis: FakeReply<SynthesisResponse>) -> Self {
        self.synthesis = synthesis;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn synthesize_calls(&self) -> usize {
        self.synthesize_calls.load(Ordering::SeqCst)
    }

    /// 所有远程调用次数
    pub fn total_calls(&self) -> usize {
        self.list_calls() + self.synthesize_calls()
    }

    pub fn last_query(&self) -> Option<VoiceQuery> {
        self.last_query.lock().ok().and_then(|q| *q)
    }

    pub fn last_request(&self) -> Option<SynthesisRequest> {
        self.last_request.lock().ok().and_then(|r| r.clone())
    }
}

#[async_trait]
impl SpeechServicePort for FakeSpeechService {
    async fn list_voices(
        &self,
        _api_key: &ApiKey,
        query: &VoiceQuery,
    ) -> Result<Option<VoiceListing>, SpeechServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(*query);
        }
        tracing::debug!(
            page = query.page(),
            page_size = query.page_size(),
            "FakeSpeechService: returning preset listing"
        );
        self.listing.to_result()
    }

    async fn synthesize(
        &self,
        _api_key: &ApiKey,
        request: &SynthesisRequest,
    ) -> Result<SynthesisResponse, SpeechServiceError> {
        self.synthesize_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }
        tracing::debug!(
            voice_uuid = %request.voice_uuid,
            text_len = request.text.as_str().len(),
            "FakeSpeechService: returning preset synthesis"
        );
        self.synthesis.to_result()
    }
}
