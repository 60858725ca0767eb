//! 요청 추적 미들웨어
//!
//! 요청마다 UUID를 발급해 span과 응답 헤더에 싣고, 요청 수와 처리 시간을 메트릭으로 남긴다.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// 요청 ID 헤더
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 요청 추적 미들웨어
///
/// - 요청별 UUID 발급 (`x-request-id` 응답 헤더)
/// - 요청 메타데이터를 담은 `http_request` span 생성
/// - 시작/완료 로그와 처리 시간 기록
/// - 요청 수, 처리 시간 메트릭 기록
pub async fn request_tracing(request: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    async move {
        tracing::info!("Request started");
        let start = Instant::now();

        let mut response = next.run(request).await;

        let duration = start.elapsed();
        let status = response.status();

        tracing::info!(
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            "Request completed"
        );

        record_request_metrics(method.as_str(), &path, status.as_u16(), duration);

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        response
    }
    .instrument(span)
    .await
}

fn record_request_metrics(method: &str, path: &str, status: u16, duration: Duration) {
    let status_str = status.to_string();
    let path = normalize_path(path);

    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => path.clone(),
        "status" => status_str.clone()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path,
        "status" => status_str
    )
    .record(duration.as_secs_f64());
}

/// 메트릭 라벨용 경로 정규화
///
/// `/detail/{id}`는 id별로 라벨이 늘어나지 않도록 `/detail/:id`로 묶고,
/// 나머지는 앞의 두 세그먼트만 남긴다.
fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => "/".to_string(),
        ["detail", _, ..] => "/detail/:id".to_string(),
        [first] => format!("/{}", first),
        [first, second, ..] => format!("/{}/{}", first, second),
    }
}
