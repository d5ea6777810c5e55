//! Voice Queries

/// 列出远程音色查询（未校验的原始参数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListVoices {
    pub page: i64,
    pub page_size: i64,
}
