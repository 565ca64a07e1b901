//! Dubbing Context - Value Objects

use serde::Serialize;
use serde_json::Value;

use super::DubRequestError;

pub const DEFAULT_SOURCE_LANGUAGE: &str = "ru";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";
pub const DEFAULT_VOICE_SIMILARITY: u64 = 85;

/// 待配音的音频（base64 编码）
///
/// 不变量:
/// - 内容非空
///
/// 网关只做存在性检查，不会解码或转发音频。
#[derive(Clone, PartialEq, Eq)]
pub struct AudioPayload(String);

impl AudioPayload {
    pub fn new(encoded: impl Into<String>) -> Result<Self, DubRequestError> {
        let encoded = encoded.into();
        if encoded.is_empty() {
            return Err(DubRequestError::MissingAudio);
        }
        Ok(Self(encoded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// base64 文本长度（字节）
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }
}

// 音频内容可能很大，Debug 只输出长度
impl std::fmt::Debug for AudioPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPayload")
            .field("encoded_len", &self.0.len())
            .finish()
    }
}

/// 配音参数
///
/// 三个字段均不做类型、范围或枚举校验，原样回显给调用方；
/// 显式的 `null` 也原样保留，只有字段缺失时才使用默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DubSettings {
    pub source_language: Value,
    pub target_language: Value,
    /// 语义上为 0-100 的整数
    pub voice_similarity: Value,
}

impl Default for DubSettings {
    fn default() -> Self {
        Self {
            source_language: Value::from(DEFAULT_SOURCE_LANGUAGE),
            target_language: Value::from(DEFAULT_TARGET_LANGUAGE),
            voice_similarity: Value::from(DEFAULT_VOICE_SIMILARITY),
        }
    }
}

/// 配音流水线步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    Transcription,
    Translation,
    VoiceSynthesis,
}

impl PipelineStep {
    /// 固定执行顺序
    pub const ALL: [PipelineStep; 3] = [
        PipelineStep::Transcription,
        PipelineStep::Translation,
        PipelineStep::VoiceSynthesis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::Translation => "translation",
            Self::VoiceSynthesis => "voice_synthesis",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 步骤状态
///
/// 网关不执行任何步骤，因此只会出现 Pending。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    pub name: PipelineStep,
    pub status: StepStatus,
}

impl StepDescriptor {
    pub fn pending(name: PipelineStep) -> Self {
        Self {
            name,
            status: StepStatus::Pending,
        }
    }

    /// 三个待处理步骤，按流水线顺序排列
    pub fn pending_pipeline() -> Vec<StepDescriptor> {
        PipelineStep::ALL.into_iter().map(Self::pending).collect()
    }
}
