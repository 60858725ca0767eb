use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{ErrorResponse, FileDownload};

use super::certificate::{
    generate_certificate as render_certificate_pdf, CERTIFICATE_FILENAME, PDF_CONTENT_TYPE,
};
use super::dto::{BackupRequest, DownloadDocRequest, ExportFormat};
use super::service::ExportService;

/// 수료 인증서 PDF 다운로드
#[utoipa::path(
    post,
    path = "/generate_certificate",
    tag = "Export",
    responses(
        (status = 200, description = "Official_Certificate.pdf (application/pdf)"),
        (status = 500, description = "PDF 생성 실패", body = ErrorResponse)
    )
)]
pub async fn generate_certificate(
    State(state): State<AppState>,
) -> Result<FileDownload, AppError> {
    let font_dir = state.config.pdf_font_dir.clone();
    let family = state.config.pdf_font_family.clone();

    // 폰트 파싱과 렌더링은 CPU 작업이므로 blocking 풀에서 수행
    let pdf = tokio::task::spawn_blocking(move || render_certificate_pdf(&font_dir, &family))
        .await
        .map_err(|e| AppError::Internal(format!("certificate task join error: {}", e)))??;

    Ok(FileDownload::new(CERTIFICATE_FILENAME, PDF_CONTENT_TYPE, pdf))
}

/// 생성 기록 전체를 Word 문서로 백업
#[utoipa::path(
    post,
    path = "/backup_all",
    tag = "Export",
    request_body = BackupRequest,
    responses(
        (status = 200, description = "My_Prompt_Bible.docx"),
        (status = 400, description = "잘못된 기록 형식", body = ErrorResponse),
        (status = 500, description = "문서 생성 실패", body = ErrorResponse)
    )
)]
pub async fn backup_all(
    request: Result<Json<BackupRequest>, JsonRejection>,
) -> Result<FileDownload, AppError> {
    let Json(request) = request?;

    tracing::info!(log_count = request.logs.len(), "Backup requested");

    ExportService::backup_all(&request.logs)
}

/// 단건 결과물 내보내기 (word / md / txt)
#[utoipa::path(
    post,
    path = "/download_doc",
    tag = "Export",
    request_body = DownloadDocRequest,
    responses(
        (status = 200, description = "Prompt_Export_<timestamp>.<ext>"),
        (status = 400, description = "지원하지 않는 형식", body = ErrorResponse),
        (status = 500, description = "문서 생성 실패", body = ErrorResponse)
    )
)]
pub async fn download_doc(
    request: Result<Json<DownloadDocRequest>, JsonRejection>,
) -> Result<FileDownload, AppError> {
    let Json(request) = request?;
    let format = ExportFormat::from_request(request.format.as_deref())?;
    let timestamp = chrono::Utc::now().timestamp();

    ExportService::export_one(&request.content, format, timestamp)
}
