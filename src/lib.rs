//! resemble-mcp - Resemble AI 语音工具服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色分页查询与摘要
//! - Synthesis Context: 合成参数校验与结果
//!
//! 应用层 (application/):
//! - Ports: SpeechServicePort, ApiKey
//! - Commands / Queries: 合成命令与音色查询的处理器
//! - ToolService: 把处理结果压平成工具文本
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Resemble HTTP 客户端与测试替身
//! - MCP: stdio 工具宿主
//! - HTTP: REST 工具宿主

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::ToolService;
pub use config::{load_config, AppConfig};
