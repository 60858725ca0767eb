use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use prompt_lab_server::{
    config::AppConfig,
    create_router,
    domain::{
        health::init_start_time,
        tactic::{prompt::TACTIC_TEMPERATURE, AiClient, OpenAiClient},
    },
    shutdown::shutdown_signal,
    utils::logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 설정 로드
    let config = AppConfig::from_env()?;

    // 3. 로깅 초기화 (guard는 종료 시까지 유지)
    std::fs::create_dir_all(&config.log_dir)?;
    let _log_guard = init_logging(&config.log_dir);

    init_start_time();

    // 4. 메트릭 레코더 설치
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    if !config.content_path.exists() {
        tracing::warn!(
            path = %config.content_path.display(),
            "Pattern file not found, catalog pages will return 500 until it exists"
        );
    }

    // 5. 상태 및 라우터 구성
    let ai_client: AiClient = Arc::new(OpenAiClient::from_config(&config, TACTIC_TEMPERATURE));
    let addr = config.bind_addr();
    let state = AppState::new(config, ai_client)?;
    let app = create_router(state, Some(metrics_handle));

    // 6. 서버 실행
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
