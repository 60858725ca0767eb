use std::time::Instant;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};
use crate::domain::catalog::PatternStore;

/// 서버 시작 시간 (전역)
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// 서버 가동 시간(초) 반환
pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 전체 헬스 체크 수행
///
/// 패턴 파일은 매 요청마다 다시 읽히므로 캐시 없이 실제 로딩으로 검증한다.
pub async fn check_health(store: &PatternStore) -> HealthStatus {
    let pattern_check = check_pattern_store(store).await;
    let status = determine_health_state(&pattern_check);

    HealthStatus {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        checks: HealthChecks {
            pattern_store: pattern_check,
        },
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if check.status {
        HealthState::Healthy
    } else {
        HealthState::Unhealthy
    }
}

async fn check_pattern_store(store: &PatternStore) -> CheckResult {
    let start = Instant::now();
    let result = store.load().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(patterns) => {
            tracing::debug!(latency_ms, count = patterns.len(), "Pattern store check passed");
            CheckResult::success(latency_ms, patterns.len())
        }
        Err(e) => {
            tracing::warn!(latency_ms, error = ?e, "Pattern store check failed");
            CheckResult::failure(latency_ms, e.message())
        }
    }
}
