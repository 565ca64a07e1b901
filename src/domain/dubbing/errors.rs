//! Dubbing Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DubRequestError {
    /// `audio` 字段缺失、为 null 或为空字符串
    #[error("No audio data provided")]
    MissingAudio,

    /// 请求体不是合法 JSON，或字段类型不匹配
    #[error("{0}")]
    MalformedPayload(String),
}

impl From<serde_json::Error> for DubRequestError {
    fn from(err: serde_json::Error) -> Self {
        DubRequestError::MalformedPayload(err.to_string())
    }
}
