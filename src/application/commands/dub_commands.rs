//! Dub Commands - 配音相关命令

use serde::Serialize;

use crate::domain::dubbing::{DubRequest, DubSettings, StepDescriptor};

/// 提交配音任务命令
#[derive(Debug, Clone)]
pub struct SubmitDubCommand {
    pub request: DubRequest,
    /// 调用方运行时提供的关联 ID
    pub request_id: String,
}

/// 受理状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcknowledgementStatus {
    Processing,
}

/// 提交配音响应（202 受理回执）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DubAcknowledgement {
    pub status: AcknowledgementStatus,
    pub message: &'static str,
    pub request_id: String,
    pub config: DubSettings,
    pub steps: Vec<StepDescriptor>,
}
