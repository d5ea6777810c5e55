//! Credential Provider - 启动时读取一次 API Key
//!
//! 之后只读，不会重新加载

use crate::application::ports::ApiKey;

/// API Key 所在的环境变量
pub const API_KEY_ENV: &str = "RESEMBLE_API_KEY";

#[derive(Debug, Clone)]
pub struct CredentialProvider {
    api_key: Option<ApiKey>,
}

impl CredentialProvider {
    /// 从 `RESEMBLE_API_KEY` 读取
    pub fn from_env() -> Self {
        Self::from_env_var(API_KEY_ENV)
    }

    pub fn from_env_var(name: &str) -> Self {
        let api_key = std::env::var(name).ok().and_then(ApiKey::new);
        tracing::debug!(env = name, present = api_key.is_some(), "Credential resolved");
        Self { api_key }
    }

    pub fn from_value(raw: Option<String>) -> Self {
        Self {
            api_key: raw.and_then(ApiKey::new),
        }
    }

    /// 返回启动时缓存的值
    pub fn get_api_key(&self) -> Option<ApiKey> {
        self.api_key.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
