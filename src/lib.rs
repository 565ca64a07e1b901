//! Dubber - 视频配音请求网关
//!
//! 接收 base64 编码的音频及配音参数（源语言、目标语言、音色相似度），
//! 校验服务商密钥与载荷后同步返回受理回执。
//! 转写、翻译、语音合成流水线由外部服务承担，不在本 crate 内实现。
//!
//! 领域层 (domain/):
//! - Dubbing Context: 请求载荷、配音参数、流水线步骤
//!
//! 应用层 (application/):
//! - RequestGateway: 方法路由、密钥检查、载荷校验、受理回执
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 适配层

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{GatewayRequest, GatewayResponse, ProviderCredentials, RequestGateway};
pub use config::{load_config, AppConfig};
