//! Infrastructure Layer - 基础设施层
//!
//! 端口的具体实现与两个工具宿主

pub mod adapters;
pub mod credential;
pub mod http;
pub mod mcp;

pub use adapters::{ResembleClient, ResembleClientConfig};
pub use credential::CredentialProvider;
pub use mcp::SpeechToolServer;
