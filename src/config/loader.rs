//! Configuration Loader
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml / config.local.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, Transport};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀，层级分隔符为 `__`
///
/// - `RESEMBLE_MCP_SERVER__TRANSPORT=http`
/// - `RESEMBLE_MCP_SERVER__PORT=9000`
/// - `RESEMBLE_MCP_RESEMBLE__TIMEOUT_SECS=30`
/// - `RESEMBLE_MCP_LOG__JSON=true`
///
/// API Key 不走这里，见 `RESEMBLE_API_KEY`
const ENV_PREFIX: &str = "RESEMBLE_MCP";

/// 加载应用配置
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置，`None` 时搜索工作目录下的默认文件
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("resemble.timeout_secs", 60)?
        .set_default("resemble.connect_timeout_secs", 10)?
        .set_default("server.transport", "stdio")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let resemble = &config.resemble;

    if resemble.voices_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Voices URL cannot be empty".to_string(),
        ));
    }

    if resemble.synthesize_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesize URL cannot be empty".to_string(),
        ));
    }

    if resemble.project_uuid.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Project uuid cannot be empty".to_string(),
        ));
    }

    if resemble.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Request timeout cannot be 0".to_string(),
        ));
    }

    if config.server.transport == Transport::Http && config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0 with the http transport".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（启动日志，不含 API Key）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Transport: {}", config.server.transport.as_str());
    if config.server.transport == Transport::Http {
        tracing::info!("Listen: {}", config.server.addr());
    }
    tracing::info!("Voices URL: {}", config.resemble.voices_url);
    tracing::info!("Synthesize URL: {}", config.resemble.synthesize_url);
    tracing::info!("Project: {}", config.resemble.project_uuid);
    tracing::info!(
        "Timeout: {}s (connect {}s)",
        config.resemble.timeout_secs,
        config.resemble.connect_timeout_secs
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
