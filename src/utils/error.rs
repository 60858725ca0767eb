use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use validator::ValidationErrors;

use super::response::{ErrorResponse, Utf8Json};

/// API Key 미입력/형식 오류 시 안내 메시지
pub const MISSING_API_KEY_MESSAGE: &str = "사이드바에서 API Key를 먼저 동기화(SAVE)해주세요.";

/// 업무 목적 누락 시 안내 메시지
pub const MISSING_PURPOSE_MESSAGE: &str = "목적 데이터 누락";

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("잘못된 요청 형식입니다: {0}")]
    JsonParseFailed(String),

    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    #[error("{0}")]
    NotFound(String),

    #[error("지원하지 않는 내보내기 형식입니다: {0}")]
    UnsupportedExportFormat(String),

    /// 외부 AI 제공자가 API Key를 거부함
    #[error("API Key가 유효하지 않습니다. 키를 다시 확인해주세요.")]
    UpstreamAuth,

    #[error("AI 서비스 요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.")]
    UpstreamRateLimit,

    /// 타임아웃, 연결 실패, 제공자 5xx
    #[error("AI 서비스가 일시적으로 응답하지 않습니다. 잠시 후 다시 시도해주세요.")]
    UpstreamTemporary,

    /// 분류되지 않은 외부 API 실패. 원문은 로그에만 남긴다.
    #[error("AI 응답 생성에 실패했습니다.")]
    UpstreamFailure(String),

    #[error("PDF 생성에 실패했습니다.")]
    PdfGenerationFailed(String),

    #[error("문서 생성에 실패했습니다.")]
    DocumentGenerationFailed(String),

    #[error("서버 에러, 관리자에게 문의 바랍니다.")]
    PatternStore(String),

    #[error("서버 에러, 관리자에게 문의 바랍니다.")]
    Internal(String),
}

impl AppError {
    /// 클라이언트에 노출되는 에러 메시지
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::MissingApiKey => "AI_001",
            AppError::NotFound(_) => "COMMON404",
            AppError::UnsupportedExportFormat(_) => "EXPORT_001",
            AppError::UpstreamAuth => "AI_002",
            AppError::UpstreamRateLimit => "AI_003",
            AppError::UpstreamTemporary => "AI_004",
            AppError::UpstreamFailure(_) => "AI_005",
            AppError::PdfGenerationFailed(_) => "EXPORT_500",
            AppError::DocumentGenerationFailed(_) => "EXPORT_500",
            AppError::PatternStore(_) => "COMMON500",
            AppError::Internal(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_)
            | AppError::ValidationError(_)
            | AppError::JsonParseFailed(_)
            | AppError::UnsupportedExportFormat(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamAuth
            | AppError::UpstreamRateLimit
            | AppError::UpstreamTemporary
            | AppError::UpstreamFailure(_)
            | AppError::PdfGenerationFailed(_)
            | AppError::DocumentGenerationFailed(_)
            | AppError::PatternStore(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 로그에만 남기는 내부 상세 정보
    fn detail(&self) -> Option<&str> {
        match self {
            AppError::UpstreamFailure(detail)
            | AppError::PdfGenerationFailed(detail)
            | AppError::DocumentGenerationFailed(detail)
            | AppError::PatternStore(detail)
            | AppError::Internal(detail) => Some(detail),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.message();

        if status.is_server_error() {
            error!(
                code,
                detail = self.detail().unwrap_or_default(),
                "Server error: {}",
                message
            );
        } else {
            warn!(code, "Client error: {}", message);
        }

        (status, Utf8Json(ErrorResponse::new(message, code))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| errors.to_string());
        AppError::ValidationError(message)
    }
}
