//! 基础设施层
//!
//! - http: axum 服务器、路由与处理器

pub mod http;
