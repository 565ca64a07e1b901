//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `OPENAI_API_KEY` / `ELEVENLABS_API_KEY`
//! 2. 环境变量（前缀 `DUBBER_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

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

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 服务商约定的密钥环境变量 → 配置键
const PROVIDER_KEY_VARS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "providers.openai_api_key"),
    ("ELEVENLABS_API_KEY", "providers.elevenlabs_api_key"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `DUBBER_SERVER__HOST=127.0.0.1`
/// - `DUBBER_SERVER__PORT=8080`
/// - `DUBBER_LOG__LEVEL=debug`
/// - `OPENAI_API_KEY=sk-...`
/// - `ELEVENLABS_API_KEY=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_with_env(None, None)
}

/// 加载配置
///
/// - `config_path` 为 None 时搜索默认配置文件
/// - `env` 为 None 时读取进程环境变量；测试中传入固定的变量表
fn load_config_with_env(
    config_path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_body_bytes", 50 * 1024 * 1024)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀的环境变量
    // 例如: DUBBER_PROVIDERS__OPENAI_API_KEY=sk-...
    builder = builder.add_source(
        Environment::with_prefix("DUBBER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env.clone()),
    );

    // 4. 服务商约定的环境变量（最高优先级）
    for (var, key) in PROVIDER_KEY_VARS {
        let value = match &env {
            Some(map) => map.get(*var).cloned(),
            None => std::env::var(var).ok(),
        };
        builder = builder.set_override_option(*key, value.filter(|v| !v.is_empty()))?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 密钥缺失不在此校验，由网关逐请求报告。
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// 密钥只输出是否已配置。
pub fn print_config(config: &AppConfig) {
    let missing = config.providers.credentials().missing();
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("OpenAI Key Configured: {}", !missing.openai);
    tracing::info!("ElevenLabs Key Configured: {}", !missing.elevenlabs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
    if missing.any() {
        tracing::warn!("Provider keys missing; dub requests will be rejected with 500");
    }
}
