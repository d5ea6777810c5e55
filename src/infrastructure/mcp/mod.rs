//! MCP Layer - Model Context Protocol 工具宿主

pub mod params;
pub mod server;

pub use params::{ListVoicesParams, TextToSpeechParams};
pub use server::SpeechToolServer;
