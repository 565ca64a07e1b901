//! 应用层错误定义
//!
//! 网关的四类错误：路由、配置、输入、意外错误

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::credentials::MissingCredentials;
use crate::domain::dubbing::DubRequestError;

/// 网关错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// 非 POST / OPTIONS 请求（调用方可修正）
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 服务商密钥缺失（运维可修正）
    #[error("API keys not configured")]
    MissingCredentials(MissingCredentials),

    /// 请求载荷缺少必要字段（调用方可修正）
    #[error("{0}")]
    BadRequest(DubRequestError),

    /// 其余所有错误，消息原样返回
    #[error("{0}")]
    Internal(String),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<MissingCredentials>,
}

impl GatewayError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingCredentials(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let missing = match self {
            Self::MissingCredentials(missing) => Some(*missing),
            _ => None,
        };
        ErrorBody {
            error: self.to_string(),
            missing,
        }
    }
}

impl From<MissingCredentials> for GatewayError {
    fn from(missing: MissingCredentials) -> Self {
        Self::MissingCredentials(missing)
    }
}

impl From<DubRequestError> for GatewayError {
    fn from(err: DubRequestError) -> Self {
        match err {
            DubRequestError::MissingAudio => Self::BadRequest(err),
            DubRequestError::MalformedPayload(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_kind() {
        assert_eq!(GatewayError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            GatewayError::from(MissingCredentials {
                openai: true,
                elevenlabs: false
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::from(DubRequestError::MissingAudio).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_audio_keeps_domain_error() {
        let err = GatewayError::from(DubRequestError::MissingAudio);
        assert_eq!(err, GatewayError::BadRequest(DubRequestError::MissingAudio));
        assert_eq!(err.body().error, "No audio data provided");
    }

    #[test]
    fn test_malformed_payload_is_internal() {
        let err = GatewayError::from(DubRequestError::MalformedPayload("expected value".into()));
        assert_eq!(err, GatewayError::Internal("expected value".to_string()));
    }

    #[test]
    fn test_body_omits_missing_for_plain_errors() {
        let body = serde_json::to_string(&GatewayError::MethodNotAllowed.body()).unwrap();
        assert_eq!(body, r#"{"error":"Method not allowed"}"#);
    }

    #[test]
    fn test_body_reports_missing_credentials() {
        let err = GatewayError::from(MissingCredentials {
            openai: false,
            elevenlabs: true,
        });
        let body = serde_json::to_string(&err.body()).unwrap();
        assert_eq!(
            body,
            r#"{"error":"API keys not configured","missing":{"openai":false,"elevenlabs":true}}"#
        );
    }
}
