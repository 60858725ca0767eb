use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// 명시적 UTF-8 JSON Content-Type
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// 에러 응답 형식
///
/// ```json
/// { "error": "목적 데이터 누락", "code": "COMMON400" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// 사용자에게 표시할 에러 메시지
    #[schema(example = "사이드바에서 API Key를 먼저 동기화(SAVE)해주세요.")]
    pub error: String,

    /// 에러 코드
    #[schema(example = "AI_001")]
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// charset을 명시한 JSON 응답
///
/// `axum::Json`은 `application/json`만 내려주므로, 한글 응답이
/// 클라이언트에서 깨지지 않도록 `charset=utf-8`을 직접 붙인다.
pub struct Utf8Json<T>(pub T);

impl<T: Serialize> IntoResponse for Utf8Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize JSON response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
                    r#"{"error":"서버 에러, 관리자에게 문의 바랍니다.","code":"COMMON500"}"#,
                )
                    .into_response()
            }
        }
    }
}

/// 첨부 파일 다운로드 응답
#[derive(Debug)]
pub struct FileDownload {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl FileDownload {
    pub fn new(filename: impl Into<String>, content_type: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            bytes,
        }
    }

    fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

impl IntoResponse for FileDownload {
    fn into_response(self) -> Response {
        let disposition = match HeaderValue::from_str(&self.content_disposition()) {
            Ok(value) => value,
            Err(_) => HeaderValue::from_static("attachment"),
        };

        (
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(self.content_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.bytes,
        )
            .into_response()
    }
}
