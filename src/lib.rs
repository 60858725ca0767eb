pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use domain::tactic::{AiClient, AiClientTrait};
pub use state::AppState;
pub use utils::error;
pub use utils::error::AppError;

use domain::{catalog, export, health, tactic};

#[derive(OpenApi)]
#[openapi(
    paths(
        tactic::handler::generate_tactic,
        export::handler::generate_certificate,
        export::handler::backup_all,
        export::handler::download_doc,
        health::handler::health_check,
    ),
    components(
        schemas(
            tactic::dto::GenerateTacticRequest,
            tactic::dto::GenerateTacticResponse,
            export::dto::LogEntry,
            export::dto::BackupRequest,
            export::dto::DownloadDocRequest,
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Tactic", description = "맞춤 프롬프트 생성 API"),
        (name = "Export", description = "인증서/문서 내보내기 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 전체 라우터 구성
///
/// `metrics_handle`이 주어지면 `/metrics`에서 Prometheus 포맷으로 노출한다.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        .route("/", get(catalog::handler::list_patterns))
        .route("/detail/:id", get(catalog::handler::show_detail))
        .route("/architect", get(catalog::handler::architect))
        .route("/generate_tactic", post(tactic::handler::generate_tactic))
        .route(
            "/generate_certificate",
            post(export::handler::generate_certificate),
        )
        .route("/backup_all", post(export::handler::backup_all))
        .route("/download_doc", post(export::handler::download_doc))
        .route("/health", get(health::handler::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(handle) = metrics_handle {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        .layer(middleware::from_fn(global::middleware::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 테스트용 라우터 (Mock AI 클라이언트 주입)
///
/// 패턴 파일 경로 외의 설정은 기본값을 사용한다.
pub fn create_test_router_with_mock(
    content_path: impl Into<PathBuf>,
    ai_client: impl AiClientTrait + 'static,
) -> Router {
    let config = AppConfig {
        content_path: content_path.into(),
        ..AppConfig::default()
    };

    create_test_router_with_config(config, ai_client)
}

/// 테스트용 라우터 (설정 + Mock AI 클라이언트 주입)
pub fn create_test_router_with_config(
    config: AppConfig,
    ai_client: impl AiClientTrait + 'static,
) -> Router {
    let client: AiClient = Arc::new(ai_client);
    let state = match AppState::new(config, client) {
        Ok(state) => state,
        Err(e) => panic!("failed to build test state: {:?}", e),
    };

    create_router(state, None)
}
