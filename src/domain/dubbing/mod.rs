//! Dubbing Context - 配音限界上下文
//!
//! 职责:
//! - 配音请求载荷解析与校验
//! - 配音参数（源语言、目标语言、音色相似度）
//! - 流水线步骤描述（转写 → 翻译 → 语音合成）

mod errors;
mod request;
mod value_objects;

pub use errors::DubRequestError;
pub use request::DubRequest;
pub use value_objects::{
    AudioPayload, DubSettings, PipelineStep, StepDescriptor, StepStatus,
    DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, DEFAULT_VOICE_SIMILARITY,
};
