//! Dub Command Handlers

use crate::application::commands::dub_commands::*;
use crate::domain::dubbing::StepDescriptor;

pub const ACCEPTED_MESSAGE: &str = "Audio received and queued for processing";

/// SubmitDub Handler - 受理配音请求
///
/// 只构造受理回执；转写、翻译、语音合成均未在此实现，步骤始终为 pending。
#[derive(Debug, Default)]
pub struct SubmitDubHandler;

impl SubmitDubHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SubmitDubCommand) -> DubAcknowledgement {
        let SubmitDubCommand {
            request,
            request_id,
        } = cmd;

        tracing::info!(
            request_id = %request_id,
            source_language = %request.settings.source_language,
            target_language = %request.settings.target_language,
            voice_similarity = %request.settings.voice_similarity,
            audio_len = request.audio.encoded_len(),
            "Dub request accepted"
        );

        DubAcknowledgement {
            status: AcknowledgementStatus::Processing,
            message: ACCEPTED_MESSAGE,
            request_id,
            config: request.settings,
            steps: StepDescriptor::pending_pipeline(),
        }
    }
}
