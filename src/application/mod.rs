//! 应用层 - 用例编排
//!
//! 包含：
//! - gateway: 请求网关（方法路由、密钥检查、载荷校验、受理回执）
//! - envelope: 与框架无关的请求/响应信封
//! - credentials: 服务商密钥
//! - commands: 配音命令及处理器
//! - error: 网关错误分类

pub mod commands;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod gateway;

// Re-exports
pub use commands::{
    handlers::SubmitDubHandler, AcknowledgementStatus, DubAcknowledgement, SubmitDubCommand,
};
pub use credentials::{MissingCredentials, ProviderCredentials};
pub use envelope::{GatewayRequest, GatewayResponse};
pub use error::{ErrorBody, GatewayError};
pub use gateway::RequestGateway;
