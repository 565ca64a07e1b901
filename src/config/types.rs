//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::ProviderCredentials;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 服务商密钥配置
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体最大字节数（base64 音频可能较大）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    50 * 1024 * 1024 // 50 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// 服务商密钥配置
///
/// 缺失不会导致启动失败，而是在每次请求时以 500 报告。
#[derive(Clone, Default, Deserialize)]
pub struct ProvidersConfig {
    /// 语音转写/翻译服务商密钥
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// 语音合成服务商密钥
    #[serde(default)]
    pub elevenlabs_api_key: Option<String>,
}

impl ProvidersConfig {
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::new(
            self.openai_api_key.clone(),
            self.elevenlabs_api_key.clone(),
        )
    }
}

impl std::fmt::Debug for ProvidersConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.credentials(), f)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_body_bytes, 50 * 1024 * 1024);
        assert_eq!(config.log.level, "info");
        assert!(config.providers.openai_api_key.is_none());
    }

    #[test]
    fn test_providers_debug_is_redacted() {
        let providers = ProvidersConfig {
            openai_api_key: Some("sk-live-123".to_string()),
            elevenlabs_api_key: None,
        };
        let debug = format!("{:?}", providers);
        assert!(!debug.contains("sk-live-123"));
    }
}
