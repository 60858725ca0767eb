use axum::{extract::State, http::StatusCode, response::IntoResponse};

use super::dto::{HealthState, HealthStatus};
use super::service::check_health;
use crate::state::AppState;
use crate::utils::response::Utf8Json;

/// 헬스체크 API
///
/// 서버 상태, 버전, 가동 시간, 패턴 데이터 파일 상태를 반환합니다.
/// 패턴 파일을 읽을 수 없으면 503을 반환합니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "정상", body = HealthStatus),
        (status = 503, description = "패턴 데이터 파일 접근 불가", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = check_health(&state.pattern_store).await;

    let code = match status.status {
        HealthState::Healthy => StatusCode::OK,
        HealthState::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Utf8Json(status))
}
