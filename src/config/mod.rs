//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 服务商约定的环境变量（`OPENAI_API_KEY` / `ELEVENLABS_API_KEY`）
//! - 带前缀的环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod loader;
mod types;

pub use loader::{load_config, print_config, ConfigError};
pub use types::{AppConfig, LogConfig, ProvidersConfig, ServerConfig};
