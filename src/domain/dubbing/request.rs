//! Dubbing Context - 请求载荷解析

use serde::Deserialize;
use serde_json::Value;

use super::{
    AudioPayload, DubRequestError, DubSettings, DEFAULT_SOURCE_LANGUAGE,
    DEFAULT_TARGET_LANGUAGE, DEFAULT_VOICE_SIMILARITY,
};

/// 已校验的配音请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DubRequest {
    pub audio: AudioPayload,
    pub settings: DubSettings,
}

/// 原始 JSON 载荷
///
/// 字段缺失时取默认值；显式的 `null` 保留为 `Value::Null`。
#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(default)]
    audio: Value,
    #[serde(default = "default_source_language")]
    source_language: Value,
    #[serde(default = "default_target_language")]
    target_language: Value,
    #[serde(default = "default_voice_similarity")]
    voice_similarity: Value,
}

fn default_source_language() -> Value {
    Value::from(DEFAULT_SOURCE_LANGUAGE)
}

fn default_target_language() -> Value {
    Value::from(DEFAULT_TARGET_LANGUAGE)
}

fn default_voice_similarity() -> Value {
    Value::from(DEFAULT_VOICE_SIMILARITY)
}

/// null、false、0、空字符串、空数组、空对象均视为“未提供”
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

impl DubRequest {
    /// 解析并校验请求体
    ///
    /// 请求体必须是 JSON 对象；空字符串同样按格式错误处理。
    pub fn parse(body: &str) -> Result<Self, DubRequestError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(DubRequestError::MalformedPayload(
                "request body must be a JSON object".to_string(),
            ));
        }
        let raw: RawPayload = serde_json::from_value(value)?;

        if is_blank(&raw.audio) {
            return Err(DubRequestError::MissingAudio);
        }
        let audio = match raw.audio {
            Value::String(encoded) => AudioPayload::new(encoded)?,
            other => {
                return Err(DubRequestError::MalformedPayload(format!(
                    "audio must be a base64 string, got {}",
                    other
                )))
            }
        };

        let settings = DubSettings {
            source_language: raw.source_language,
            target_language: raw.target_language,
            voice_similarity: raw.voice_similarity,
        };

        Ok(Self { audio, settings })
    }
}
