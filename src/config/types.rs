//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::infrastructure::adapters::{
    ResembleClientConfig, DEFAULT_SYNTHESIZE_URL, DEFAULT_VOICES_URL,
};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Resemble 远端配置
    #[serde(default)]
    pub resemble: ResembleConfig,

    /// 工具宿主配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// Resemble 远端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ResembleConfig {
    /// 音色列表接口
    #[serde(default = "default_voices_url")]
    pub voices_url: String,

    /// 同步合成接口
    #[serde(default = "default_synthesize_url")]
    pub synthesize_url: String,

    /// 合成请求携带的项目标识
    #[serde(default = "default_project_uuid")]
    pub project_uuid: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 建连超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_voices_url() -> String {
    DEFAULT_VOICES_URL.to_string()
}

fn default_synthesize_url() -> String {
    DEFAULT_SYNTHESIZE_URL.to_string()
}

fn default_project_uuid() -> String {
    "49a55388".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for ResembleConfig {
    fn default() -> Self {
        Self {
            voices_url: default_voices_url(),
            synthesize_url: default_synthesize_url(),
            project_uuid: default_project_uuid(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl From<&ResembleConfig> for ResembleClientConfig {
    fn from(config: &ResembleConfig) -> Self {
        Self {
            voices_url: config.voices_url.clone(),
            synthesize_url: config.synthesize_url.clone(),
            timeout_secs: config.timeout_secs,
            connect_timeout_secs: config.connect_timeout_secs,
        }
    }
}

/// 工具宿主的传输方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// MCP over stdin/stdout
    #[default]
    Stdio,
    /// REST 工具调用
    Http,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Http => "http",
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,

    /// 监听地址（仅 http）
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口（仅 http）
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8848
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
