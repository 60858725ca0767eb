//! 통합 테스트 공용 픽스처와 Mock AI 클라이언트

#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_openai::types::ChatCompletionRequestMessage;
use prompt_lab_server::{error::AppError, AiClientTrait};
use tempfile::NamedTempFile;

/// 기본 패턴 데이터. id 순서와 배열 순서가 다르다.
pub const SAMPLE_PATTERNS: &str = r#"{
  "prompt_patterns": [
    { "id": 1, "title": "업무 요약", "template": "다음 내용을 3줄로 요약하라" },
    { "id": 5, "title": "번역 검수", "template": "번역문의 오류를 찾아라" },
    { "id": 3, "title": "회의록 정리", "template": "회의록을 항목별로 정리하라" },
    { "id": 26, "title": "Prompt Architect Lab", "template": "lab" }
  ]
}"#;

/// 패턴 파일 픽스처 (반환값이 살아있는 동안 유지)
pub fn pattern_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// 고정 응답을 반환하고 호출 정보를 기록하는 Mock
#[derive(Clone)]
pub struct MockAiClientSuccess {
    response: String,
    calls: Arc<AtomicUsize>,
    last_api_key: Arc<Mutex<Option<String>>>,
}

impl MockAiClientSuccess {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            last_api_key: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    pub fn last_api_key(&self) -> Arc<Mutex<Option<String>>> {
        self.last_api_key.clone()
    }
}

#[async_trait::async_trait]
impl AiClientTrait for MockAiClientSuccess {
    async fn complete(
        &self,
        api_key: &str,
        _messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_api_key.lock().unwrap() = Some(api_key.to_string());
        Ok(self.response.clone())
    }
}

/// 항상 지정한 에러를 반환하는 Mock
pub struct MockAiClientError {
    kind: fn() -> AppError,
}

impl MockAiClientError {
    pub fn new(kind: fn() -> AppError) -> Self {
        Self { kind }
    }
}

#[async_trait::async_trait]
impl AiClientTrait for MockAiClientError {
    async fn complete(
        &self,
        _api_key: &str,
        _messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, AppError> {
        Err((self.kind)())
    }
}
