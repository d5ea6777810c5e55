//! Synthesis Context - Errors

use thiserror::Error;

use super::{AcceptEncoding, SampleRate, SynthesisText};

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Voice id must be a string or number.")]
    InvalidVoiceId,

    #[error("Text length exceeds {} characters limit.", SynthesisText::MAX_CHARS)]
    TextTooLong(usize),

    #[error("Sample rate must be an integer, got {0}.")]
    SampleRateNotInteger(String),

    #[error("Invalid sample rate. Must be one of {:?}.", SampleRate::SUPPORTED)]
    UnsupportedSampleRate(i64),

    #[error("Invalid encoding. Must be one of [{}].", AcceptEncoding::supported_list())]
    UnsupportedEncoding(String),
}
