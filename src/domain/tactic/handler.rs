use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{ErrorResponse, Utf8Json};

use super::dto::{GenerateTacticRequest, GenerateTacticResponse};
use super::validator::{validate_api_key, validate_purpose};

/// 맞춤 프롬프트(전술) 생성
///
/// 사용자 본인의 API Key로 AI를 호출하여 업무 목적에 맞는 프롬프트를 설계합니다.
/// 검증 순서: API Key(401) → 업무 목적(400).
#[utoipa::path(
    post,
    path = "/generate_tactic",
    tag = "Tactic",
    request_body = GenerateTacticRequest,
    responses(
        (status = 200, description = "생성 성공", body = GenerateTacticResponse),
        (status = 400, description = "업무 목적 누락 또는 잘못된 요청", body = ErrorResponse),
        (status = 401, description = "API Key 누락", body = ErrorResponse),
        (status = 500, description = "AI 호출 실패", body = ErrorResponse)
    )
)]
pub async fn generate_tactic(
    State(state): State<AppState>,
    request: Result<Json<GenerateTacticRequest>, JsonRejection>,
) -> Result<Utf8Json<GenerateTacticResponse>, AppError> {
    let Json(request) = request?;

    let api_key = validate_api_key(request.api_key.as_deref())?;
    let purpose = validate_purpose(request.purpose.as_deref())?;
    request.validate()?;

    tracing::info!(purpose_length = purpose.len(), "Tactic request received");

    let result = state.tactic_service.generate(purpose, api_key).await?;

    Ok(Utf8Json(GenerateTacticResponse { result }))
}
