//! HTTP 形态的请求/响应信封
//!
//! 与具体 Web 框架无关：既可以由 axum 适配层构造，也可以直接从
//! 函数运行时的事件 JSON（`httpMethod` / `body` / `headers`）反序列化。

use std::collections::{BTreeMap, HashMap};

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize, Serializer};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const PREFLIGHT_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const PREFLIGHT_ALLOW_HEADERS: &str = "Content-Type, X-User-Id";
pub const PREFLIGHT_MAX_AGE_SECS: u32 = 86400;

// 序列化失败时的兜底响应体
const FALLBACK_ERROR_BODY: &str = r#"{"error":"Failed to serialize response body"}"#;

/// 入站请求
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayRequest {
    #[serde(rename = "httpMethod", default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_method() -> String {
    Method::POST.as_str().to_string()
}

impl GatewayRequest {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: method.into(),
            body,
            headers: HashMap::new(),
        }
    }

    pub fn is_method(&self, method: &Method) -> bool {
        self.method == method.as_str()
    }
}

/// 出站响应
///
/// 每个响应都带 `Access-Control-Allow-Origin: *`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

impl GatewayResponse {
    fn base(status_code: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// CORS 预检响应：200，空响应体
    pub fn preflight() -> Self {
        let mut response = Self::base(StatusCode::OK, String::new());
        response.headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            PREFLIGHT_ALLOW_METHODS.to_string(),
        );
        response.headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            PREFLIGHT_ALLOW_HEADERS.to_string(),
        );
        response.headers.insert(
            "Access-Control-Max-Age".to_string(),
            PREFLIGHT_MAX_AGE_SECS.to_string(),
        );
        response
    }

    /// JSON 响应
    pub fn json<T: Serialize>(status_code: StatusCode, payload: &T) -> Self {
        let (status_code, body) = match serde_json::to_string(payload) {
            Ok(body) => (status_code, body),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    FALLBACK_ERROR_BODY.to_string(),
                )
            }
        };
        let mut response = Self::base(status_code, body);
        response
            .headers
            .insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        response
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
