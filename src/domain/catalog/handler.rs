use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Html,
};

use crate::state::AppState;
use crate::utils::error::AppError;

use super::service::{CatalogService, DetailPage};

/// 패턴 목록 화면
pub async fn list_patterns(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let patterns = CatalogService::list_patterns(&state.pattern_store).await?;
    tracing::debug!(count = patterns.len(), "Rendering pattern index");

    Ok(Html(state.views.render_index(&patterns)?))
}

/// 패턴 상세 화면
///
/// 음이 아닌 정수가 아닌 id는 존재하지 않는 패턴과 동일하게 404로 처리한다.
pub async fn show_detail(
    State(state): State<AppState>,
    pattern_id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(pattern_id) = pattern_id
        .map_err(|e| AppError::NotFound(format!("존재하지 않는 패턴입니다: {}", e.body_text())))?;

    if pattern_id < 0 {
        return Err(AppError::NotFound(format!(
            "존재하지 않는 패턴입니다: {}",
            pattern_id
        )));
    }

    let page = CatalogService::show_detail(
        &state.pattern_store,
        state.config.lab_pattern_id,
        pattern_id,
    )
    .await?;

    let html = match page {
        DetailPage::Lab { patterns } => state.views.render_lab(&patterns)?,
        DetailPage::Detail {
            pattern,
            next_pattern,
            patterns,
        } => state
            .views
            .render_detail(&pattern, &patterns, next_pattern.as_ref())?,
    };

    Ok(Html(html))
}

/// Prompt Architect Lab 화면
pub async fn architect(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let patterns = CatalogService::list_patterns(&state.pattern_store).await?;

    Ok(Html(state.views.render_lab(&patterns)?))
}
