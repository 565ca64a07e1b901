//! Dub Gateway Handler
//!
//! 任意方法、任意路径的请求都交给网关处理

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::application::{ErrorBody, GatewayRequest, GatewayResponse};
use crate::infrastructure::http::middleware::REQUEST_ID_HEADER;
use crate::infrastructure::http::state::AppState;

pub async fn dub_gateway(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    // 超出大小限制等读取失败仍以网关格式返回，保留 CORS 头
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return GatewayResponse::json(
                rejection.status(),
                &ErrorBody {
                    error: rejection.body_text(),
                    missing: None,
                },
            )
            .into_response();
        }
    };

    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let request = GatewayRequest {
        method: method.as_str().to_string(),
        body: (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned()),
        headers: collect_headers(&headers),
    };

    state.gateway.handle(&request, &request_id).into_response()
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
