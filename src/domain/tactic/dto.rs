use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 업무 목적 최대 길이
pub const PURPOSE_MAX_LENGTH: u64 = 5000;

/// 전술 생성 요청 DTO
///
/// 필드 누락은 역직렬화 단계가 아니라 검증 단계에서 401/400으로 구분해 처리하므로 모두 Option이다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateTacticRequest {
    /// 업무 목적
    #[serde(default)]
    #[validate(length(max = 5000, message = "업무 목적은 5000자 이하여야 합니다"))]
    #[schema(example = "신규 고객 온보딩 이메일 시퀀스 작성")]
    pub purpose: Option<String>,

    /// 사용자 본인의 OpenAI API Key (서버에 저장하지 않음)
    #[serde(default)]
    #[schema(example = "sk-proj-xxxxxxxxxxxxxxxx")]
    pub api_key: Option<String>,
}

/// 전술 생성 성공 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateTacticResponse {
    /// 생성된 프롬프트 (Markdown)
    #[schema(example = "## 역할(Persona)\n당신은 ...")]
    pub result: String,
}
