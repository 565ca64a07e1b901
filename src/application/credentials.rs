//! Provider Credentials
//!
//! 语音转写/翻译服务商与语音合成服务商的 API 密钥。
//! 网关只检查密钥是否存在，不会记录、回显或持久化密钥内容。

use serde::Serialize;

/// 服务商密钥
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    openai_api_key: Option<String>,
    elevenlabs_api_key: Option<String>,
}

/// 各服务商密钥的缺失情况
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingCredentials {
    pub openai: bool,
    pub elevenlabs: bool,
}

impl MissingCredentials {
    pub fn any(&self) -> bool {
        self.openai || self.elevenlabs
    }
}

impl ProviderCredentials {
    /// 空字符串视为未配置
    pub fn new(openai_api_key: Option<String>, elevenlabs_api_key: Option<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.filter(|k| !k.is_empty()),
            elevenlabs_api_key: elevenlabs_api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn missing(&self) -> MissingCredentials {
        MissingCredentials {
            openai: self.openai_api_key.is_none(),
            elevenlabs: self.elevenlabs_api_key.is_none(),
        }
    }

    /// 两个密钥均存在时返回 Ok
    pub fn ensure_present(&self) -> Result<(), MissingCredentials> {
        let missing = self.missing();
        if missing.any() {
            return Err(missing);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(key: &Option<String>) -> &'static str {
            if key.is_some() {
                "<redacted>"
            } else {
                "<missing>"
            }
        }
        f.debug_struct("ProviderCredentials")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("elevenlabs_api_key", &redact(&self.elevenlabs_api_key))
            .finish()
    }
}
