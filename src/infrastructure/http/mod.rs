//! HTTP Layer - axum 适配层
//!
//! 把 HTTP 请求转换为网关信封，再把网关响应写回 HTTP。

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
