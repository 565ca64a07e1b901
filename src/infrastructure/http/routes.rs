//! HTTP Routes
//!
//! API Endpoints:
//! - /ping   GET   健康检查
//! - 其余任意路径、任意方法 → 配音网关（由网关自行处理 OPTIONS / POST / 405）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::dub_gateway),
        )
        .fallback(handlers::dub_gateway)
}
