use crate::utils::error::{AppError, MISSING_PURPOSE_MESSAGE};

/// 공백 제거 후 최소 API Key 길이
pub const MIN_API_KEY_LENGTH: usize = 10;

/// API Key 유효성 검증
///
/// 누락되었거나 공백 제거 후 10자 미만이면 외부 호출 없이 401로 거절한다.
pub fn validate_api_key(api_key: Option<&str>) -> Result<&str, AppError> {
    match api_key.map(str::trim) {
        Some(key) if key.chars().count() >= MIN_API_KEY_LENGTH => Ok(key),
        _ => Err(AppError::MissingApiKey),
    }
}

/// 업무 목적 누락 검증
pub fn validate_purpose(purpose: Option<&str>) -> Result<&str, AppError> {
    match purpose {
        Some(purpose) if !purpose.is_empty() => Ok(purpose),
        _ => Err(AppError::BadRequest(MISSING_PURPOSE_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_missing_api_key() {
        assert!(matches!(validate_api_key(None), Err(AppError::MissingApiKey)));
    }

    #[test]
    fn should_reject_short_api_key() {
        assert!(matches!(
            validate_api_key(Some("abc")),
            Err(AppError::MissingApiKey)
        ));
    }

    #[test]
    fn should_measure_length_after_trimming() {
        assert!(matches!(
            validate_api_key(Some("   sk-12345   ")),
            Err(AppError::MissingApiKey)
        ));
        assert_eq!(validate_api_key(Some("  sk-1234567  ")).unwrap(), "sk-1234567");
    }

    #[test]
    fn should_accept_key_at_minimum_length() {
        assert!(validate_api_key(Some("0123456789")).is_ok());
    }

    #[test]
    fn should_reject_missing_or_empty_purpose() {
        assert!(matches!(validate_purpose(None), Err(AppError::BadRequest(_))));
        assert!(matches!(
            validate_purpose(Some("")),
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(validate_purpose(Some("기획서 작성")).unwrap(), "기획서 작성");
    }
}
