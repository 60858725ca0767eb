use crate::utils::error::AppError;

use super::client::{build_system_message, build_user_message, AiClient};
use super::prompt::{user_prompt, SYSTEM_INSTRUCTION};

/// 전술 생성 서비스
///
/// 재시도 없이 한 번만 호출하며, 실패는 분류된 에러로 그대로 반환한다.
#[derive(Clone)]
pub struct TacticService {
    client: AiClient,
}

impl TacticService {
    pub fn new(client: AiClient) -> Self {
        Self { client }
    }

    /// 업무 목적에 맞는 프롬프트 생성
    ///
    /// `api_key`는 이미 검증된 호출자의 키이며, 서버 기본 키로 대체하지 않는다.
    pub async fn generate(&self, purpose: &str, api_key: &str) -> Result<String, AppError> {
        let messages = vec![
            build_system_message(SYSTEM_INSTRUCTION)?,
            build_user_message(&user_prompt(purpose))?,
        ];

        let result = self.client.complete(api_key, messages).await;

        match &result {
            Ok(text) => tracing::info!(result_length = text.len(), "Tactic generated"),
            Err(e) => tracing::warn!(code = e.error_code(), "Tactic generation failed"),
        }

        result
    }
}
