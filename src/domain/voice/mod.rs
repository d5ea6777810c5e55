//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 分页参数校验
//! - 远程音色摘要

mod errors;
mod value_objects;

pub use errors::VoiceError;
pub use value_objects::{VoiceQuery, VoiceSummary, MAX_PAGE_SIZE, MIN_PAGE, MIN_PAGE_SIZE};
