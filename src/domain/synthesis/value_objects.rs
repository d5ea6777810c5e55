//! Synthesis Context - Value Objects

use std::fmt;
use std::str::FromStr;

use super::SynthesisError;

/// 输出采样率（Hz）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRate(u32);

impl SampleRate {
    /// 远程服务支持的采样率
    pub const SUPPORTED: [u32; 6] = [8000, 16000, 22050, 32000, 44100, 48000];

    pub fn new(hz: i64) -> Result<Self, SynthesisError> {
        Self::SUPPORTED
            .iter()
            .copied()
            .find(|&supported| i64::from(supported) == hz)
            .map(Self)
            .ok_or(SynthesisError::UnsupportedSampleRate(hz))
    }

    pub fn hz(&self) -> u32 {
        self.0
    }
}

/// 请求头 Accept-Encoding 的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptEncoding {
    Gzip,
    Deflate,
    Br,
}

impl AcceptEncoding {
    pub const ALL: [AcceptEncoding; 3] = [Self::Gzip, Self::Deflate, Self::Br];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
            Self::Br => "br",
        }
    }

    /// "gzip, deflate, br"
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for AcceptEncoding {
    type Err = SynthesisError;

    // 大小写敏感，与远程服务的取值保持一致
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| SynthesisError::UnsupportedEncoding(s.to_string()))
    }
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 待合成文本
///
/// 不变量: 字符数（Unicode 标量值）不超过 3000
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisText(String);

impl SynthesisText {
    pub const MAX_CHARS: usize = 3000;

    pub fn new(text: impl Into<String>) -> Result<Self, SynthesisError> {
        let text = text.into();
        let len = text.chars().count();
        if len > Self::MAX_CHARS {
            return Err(SynthesisError::TextTooLong(len));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 远程音色标识（已转为字符串并去除首尾空白）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceUuid(String);

impl VoiceUuid {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
