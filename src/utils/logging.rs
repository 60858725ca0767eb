//! 로깅 초기화 모듈
//!
//! JSON 형식의 구조화된 로깅을 stdout과 일별 로그 파일에 동시 출력합니다.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG`가 없을 때 사용하는 기본 필터
pub const DEFAULT_LOG_FILTER: &str = "info,prompt_lab_server=debug,tower_http=info";

/// 로깅 시스템을 초기화합니다.
///
/// 로그는 stdout과 `log_dir`의 일별 파일(`server.log.YYYY-MM-DD`)에 기록됩니다.
/// 반환되는 `WorkerGuard`를 main에서 유지해야 종료 시 버퍼링된 로그가 유실되지 않습니다.
pub fn init_logging(log_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily(log_dir, "server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // 테스트 등에서 이미 초기화된 경우
        eprintln!("Failed to initialize tracing: {}", err);
    }

    guard
}
