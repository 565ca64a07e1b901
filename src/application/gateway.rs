//! Request Gateway
//!
//! 将一个入站请求映射为恰好一个出站响应：
//! OPTIONS 预检 → 方法检查 → 密钥检查 → 载荷解析 → 受理回执。
//! 不访问任何外部服务，也不持有跨请求的可变状态。

use http::{Method, StatusCode};

use super::commands::handlers::SubmitDubHandler;
use super::commands::{DubAcknowledgement, SubmitDubCommand};
use super::credentials::ProviderCredentials;
use super::envelope::{GatewayRequest, GatewayResponse};
use super::error::GatewayError;
use crate::domain::dubbing::DubRequest;

/// 配音请求网关
#[derive(Debug)]
pub struct RequestGateway {
    credentials: ProviderCredentials,
    submit_dub_handler: SubmitDubHandler,
}

impl RequestGateway {
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self {
            credentials,
            submit_dub_handler: SubmitDubHandler::new(),
        }
    }

    /// 处理一次调用
    pub fn handle(&self, request: &GatewayRequest, request_id: &str) -> GatewayResponse {
        if request.is_method(&Method::OPTIONS) {
            tracing::debug!(request_id = %request_id, "CORS preflight");
            return GatewayResponse::preflight();
        }

        match self.submit(request, request_id) {
            Ok(ack) => GatewayResponse::json(StatusCode::ACCEPTED, &ack),
            Err(err) => {
                let status = err.status();
                match &err {
                    GatewayError::MissingCredentials(missing) => tracing::error!(
                        request_id = %request_id,
                        openai_missing = missing.openai,
                        elevenlabs_missing = missing.elevenlabs,
                        "Provider credentials not configured"
                    ),
                    GatewayError::Internal(msg) => tracing::error!(
                        request_id = %request_id,
                        error = %msg,
                        "Dub request failed"
                    ),
                    _ => tracing::warn!(
                        request_id = %request_id,
                        method = %request.method,
                        status = status.as_u16(),
                        error = %err,
                        "Dub request rejected"
                    ),
                }
                GatewayResponse::json(status, &err.body())
            }
        }
    }

    fn submit(
        &self,
        request: &GatewayRequest,
        request_id: &str,
    ) -> Result<DubAcknowledgement, GatewayError> {
        if !request.is_method(&Method::POST) {
            return Err(GatewayError::MethodNotAllowed);
        }

        // 密钥检查先于载荷解析
        self.credentials.ensure_present()?;

        // 只有请求体缺失时才按空对象处理；空字符串交给解析器报格式错误
        let dub_request = DubRequest::parse(request.body.as_deref().unwrap_or("{}"))?;

        Ok(self.submit_dub_handler.handle(SubmitDubCommand {
            request: dub_request,
            request_id: request_id.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn gateway() -> RequestGateway {
        RequestGateway::new(ProviderCredentials::new(
            Some("sk-test".into()),
            Some("el-test".into()),
        ))
    }

    fn post(body: &str) -> GatewayRequest {
        GatewayRequest::new("POST", Some(body.to_string()))
    }

    fn body_json(response: &GatewayResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_options_preflight() {
        let response = gateway().handle(&GatewayRequest::new("OPTIONS", None), "req");
        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(response.body, "");
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.header("Access-Control-Max-Age"), Some("86400"));
    }

    #[test]
    fn test_preflight_skips_credential_check() {
        let gateway = RequestGateway::new(ProviderCredentials::default());
        let response = gateway.handle(&GatewayRequest::new("OPTIONS", None), "req");
        assert_eq!(response.status_code, StatusCode::OK);
    }

    #[test]
    fn test_other_methods_not_allowed() {
        for method in ["GET", "PUT", "DELETE", "PATCH", "HEAD", "post"] {
            let response = gateway().handle(&GatewayRequest::new(method, None), "req");
            assert_eq!(response.status_code, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
            assert_eq!(response.body, r#"{"error":"Method not allowed"}"#);
            assert_eq!(response.header("Content-Type"), Some("application/json"));
            assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        }
    }

    #[test]
    fn test_valid_payload_accepted() {
        let response = gateway().handle(&post(r#"{"audio":"QQ=="}"#), "req-123");
        assert_eq!(response.status_code, StatusCode::ACCEPTED);
        assert!(!response.is_base64_encoded);

        let body = body_json(&response);
        assert_eq!(body["status"], "processing");
        assert_eq!(body["request_id"], "req-123");
        assert_eq!(body["config"]["source_language"], "ru");
        assert_eq!(body["config"]["target_language"], "en");
        assert_eq!(body["config"]["voice_similarity"], 85);
        assert_eq!(
            body["steps"],
            serde_json::json!([
                {"name": "transcription", "status": "pending"},
                {"name": "translation", "status": "pending"},
                {"name": "voice_synthesis", "status": "pending"}
            ])
        );
    }

    #[test]
    fn test_missing_openai_key_only() {
        let gateway = RequestGateway::new(ProviderCredentials::new(None, Some("el".into())));
        // 载荷本身非法，但密钥检查在前
        let response = gateway.handle(&post("not json"), "req");
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&response);
        assert_eq!(body["error"], "API keys not configured");
        assert_eq!(body["missing"]["openai"], true);
        assert_eq!(body["missing"]["elevenlabs"], false);
    }

    #[test]
    fn test_missing_both_keys() {
        let gateway = RequestGateway::new(ProviderCredentials::default());
        let response = gateway.handle(&post(r#"{"audio":"QQ=="}"#), "req");
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&response);
        assert_eq!(body["missing"]["openai"], true);
        assert_eq!(body["missing"]["elevenlabs"], true);
    }

    #[test]
    fn test_missing_audio() {
        for body in [r#"{"audio":""}"#, r#"{"source_language":"en"}"#, r#"{"audio":0}"#] {
            let response = gateway().handle(&post(body), "req");
            assert_eq!(response.status_code, StatusCode::BAD_REQUEST, "{}", body);
            assert_eq!(response.body, r#"{"error":"No audio data provided"}"#);
        }
        let response = gateway().handle(&GatewayRequest::new("POST", None), "req");
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_empty_event_body_is_malformed() {
        let request: GatewayRequest =
            serde_json::from_str(r#"{"httpMethod":"POST","body":""}"#).unwrap();
        let response = gateway().handle(&request, "req");
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_json(&response)["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_settings_echoed_verbatim() {
        let response = gateway().handle(
            &post(r#"{"audio":"QQ==","source_language":5,"target_language":null,"voice_similarity":"90"}"#),
            "req",
        );
        assert_eq!(response.status_code, StatusCode::ACCEPTED);
        assert_eq!(
            body_json(&response)["config"],
            serde_json::json!({
                "source_language": 5,
                "target_language": null,
                "voice_similarity": "90"
            })
        );
    }

    #[test]
    fn test_malformed_json() {
        let response = gateway().handle(&post("{audio: nope"), "req");
        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&response);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body.get("missing").is_none());
    }

    #[test]
    fn test_repeated_requests_identical_except_request_id() {
        let gateway = gateway();
        let request = post(r#"{"audio":"QQ==","voice_similarity":70}"#);
        let first = gateway.handle(&request, "same");
        let second = gateway.handle(&request, "same");
        assert_eq!(first, second);

        let third = gateway.handle(&request, "other");
        assert_eq!(third.body.replace("other", "same"), first.body);
    }
}
