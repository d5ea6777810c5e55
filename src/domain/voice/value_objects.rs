//! Voice Context - Value Objects

use std::fmt;

use super::VoiceError;

/// 最小页码
pub const MIN_PAGE: i64 = 1;
/// 每页最少条目数
pub const MIN_PAGE_SIZE: i64 = 10;
/// 每页最多条目数
pub const MAX_PAGE_SIZE: i64 = 1000;

/// 音色列表分页查询
///
/// 不变量:
/// - page >= 1
/// - 10 <= page_size <= 1000
///
/// 越界在构造时即失败，不会产生远程调用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceQuery {
    page: u64,
    page_size: u64,
}

impl VoiceQuery {
    /// 按顺序校验页码和页大小
    pub fn new(page: i64, page_size: i64) -> Result<Self, VoiceError> {
        if page < MIN_PAGE {
            return Err(VoiceError::InvalidPage(page));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(VoiceError::InvalidPageSize(page_size));
        }
        // 上面已排除负数
        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

/// 远程音色的摘要信息
///
/// 只保留 name / id / voice_type，其余字段丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSummary {
    pub name: String,
    pub id: String,
    pub voice_type: String,
}

impl fmt::Display for VoiceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Voice Model Name: {}\nVoice Model ID: {}\nVoice Type: {}",
            self.name, self.id, self.voice_type
        )
    }
}
