use serde::Serialize;
use utoipa::ToSchema;

/// 전체 헬스 상태 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// 서버 상태 (HEALTHY/UNHEALTHY)
    pub status: HealthState,
    /// 서버 버전
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    /// 의존성 체크 결과
    pub checks: HealthChecks,
}

/// 서버 상태
#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// 의존성 체크 결과 모음
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    /// 패턴 데이터 파일 상태
    pub pattern_store: CheckResult,
}

/// 개별 체크 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// 체크 성공 여부
    #[schema(example = true)]
    pub status: bool,
    /// 체크 소요 시간 (ms)
    #[schema(example = 3)]
    pub latency_ms: u64,
    /// 로딩된 패턴 수
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 30)]
    pub pattern_count: Option<usize>,
    /// 에러 메시지 (실패 시)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(latency_ms: u64, pattern_count: usize) -> Self {
        Self {
            status: true,
            latency_ms,
            pattern_count: Some(pattern_count),
            error: None,
        }
    }

    pub fn failure(latency_ms: u64, error: String) -> Self {
        Self {
            status: false,
            latency_ms,
            pattern_count: None,
            error: Some(error),
        }
    }
}
