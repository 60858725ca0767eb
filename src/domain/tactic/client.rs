use std::sync::Arc;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};

use crate::config::AppConfig;
use crate::utils::error::AppError;

/// OpenAI 에러를 세분화된 AppError로 변환
///
/// 제공자 원문 메시지는 `UpstreamFailure` 내부에만 담겨 로그로 남고 클라이언트에는 노출되지 않는다.
fn classify_openai_error(error: OpenAIError) -> AppError {
    match &error {
        OpenAIError::ApiError(api_err) => {
            let err_type = api_err.r#type.as_deref().unwrap_or("");
            let err_code = api_err
                .code
                .as_ref()
                .map(|code| code.to_string())
                .unwrap_or_default();
            let message = api_err.message.to_lowercase();

            if err_code.contains("invalid_api_key")
                || err_type == "authentication_error"
                || message.contains("api key")
            {
                AppError::UpstreamAuth
            } else if err_type == "rate_limit_error"
                || err_code.contains("rate_limit_exceeded")
                || err_code.contains("insufficient_quota")
                || message.contains("rate limit")
            {
                AppError::UpstreamRateLimit
            } else if err_type == "server_error" || message.contains("overloaded") {
                AppError::UpstreamTemporary
            } else {
                AppError::UpstreamFailure(api_err.message.clone())
            }
        }
        OpenAIError::Reqwest(req_err) => {
            let status = req_err.status().map(|s| s.as_u16());
            if req_err.is_timeout() || req_err.is_connect() {
                AppError::UpstreamTemporary
            } else if status == Some(401) {
                AppError::UpstreamAuth
            } else if status == Some(429) {
                AppError::UpstreamRateLimit
            } else if req_err
                .status()
                .map(|s| s.is_server_error())
                .unwrap_or(false)
            {
                AppError::UpstreamTemporary
            } else {
                AppError::UpstreamFailure(req_err.to_string())
            }
        }
        _ => AppError::UpstreamFailure(error.to_string()),
    }
}

/// AI 클라이언트 인터페이스
///
/// 호출마다 사용자의 API Key를 받아 요청하며, 테스트에서 Mock 객체로 대체할 수 있습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AiClientTrait: Send + Sync {
    /// 채팅 완성 요청
    async fn complete(
        &self,
        api_key: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError>;
}

/// Arc로 래핑된 AiClient (Clone 지원)
pub type AiClient = Arc<dyn AiClientTrait>;

/// OpenAI API 클라이언트 구현체
///
/// 서버 기본 키를 보관하지 않고, 요청마다 호출자의 키로 클라이언트를 구성한다.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_base: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(
        api_base: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            model: model.into(),
            temperature,
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig, temperature: f32) -> Self {
        Self::new(
            config.openai_api_base.clone(),
            config.openai_model.clone(),
            temperature,
            config.openai_timeout,
        )
    }
}

#[async_trait::async_trait]
impl AiClientTrait for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&self.api_base);
        let client = Client::with_config(config).with_backoff(no_retry_backoff());

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = tokio::time::timeout(self.timeout, client.chat().create(request))
            .await
            .map_err(|_| {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "OpenAI call timed out");
                AppError::UpstreamTemporary
            })?
            .map_err(classify_openai_error)?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::UpstreamFailure("empty completion".to_string()))
    }
}

/// 재시도 없는 backoff 정책
///
/// 최대 경과 시간이 0이므로 첫 실패(429 포함)가 그대로 반환된다.
fn no_retry_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// 메시지 빌더 헬퍼 함수 (crate 내부용)
pub(crate) fn build_system_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::System(
        ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

pub(crate) fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::error::ApiError;

    fn api_error(message: &str, err_type: Option<&str>) -> OpenAIError {
        OpenAIError::ApiError(ApiError {
            message: message.to_string(),
            r#type: err_type.map(str::to_string),
            param: None,
            code: None,
        })
    }

    #[test]
    fn backoff_policy_should_never_schedule_retry() {
        use backoff::backoff::Backoff;

        let mut policy = no_retry_backoff();

        assert_eq!(policy.next_backoff(), None);
    }

    #[test]
    fn should_build_system_message() {
        let result = build_system_message("test prompt");
        assert!(matches!(result, Ok(ChatCompletionRequestMessage::System(_))));
    }

    #[test]
    fn should_build_user_message() {
        let result = build_user_message("test content");
        assert!(matches!(result, Ok(ChatCompletionRequestMessage::User(_))));
    }

    #[test]
    fn should_classify_invalid_key_as_auth_error() {
        let error = api_error(
            "Incorrect API key provided: sk-abc***. You can find your API key at ...",
            Some("invalid_request_error"),
        );

        assert!(matches!(classify_openai_error(error), AppError::UpstreamAuth));
    }

    #[test]
    fn should_classify_rate_limit() {
        let error = api_error("Rate limit reached for gpt-4o-mini", Some("rate_limit_error"));

        assert!(matches!(
            classify_openai_error(error),
            AppError::UpstreamRateLimit
        ));
    }

    #[test]
    fn should_classify_server_error_as_temporary() {
        let error = api_error("The server had an error", Some("server_error"));

        assert!(matches!(
            classify_openai_error(error),
            AppError::UpstreamTemporary
        ));
    }

    #[test]
    fn should_keep_unknown_error_detail_for_logging() {
        let error = api_error("model_not_found", Some("invalid_request_error"));

        match classify_openai_error(error) {
            AppError::UpstreamFailure(detail) => assert_eq!(detail, "model_not_found"),
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn should_classify_invalid_argument_as_failure() {
        let error = OpenAIError::InvalidArgument("bad".to_string());

        assert!(matches!(
            classify_openai_error(error),
            AppError::UpstreamFailure(_)
        ));
    }
}
