//! Resemble Adapter - Resemble AI 客户端实现

mod dto;
mod fake_client;
mod http_client;

pub use fake_client::{FakeReply, FakeSpeechService};
pub use http_client::*;
