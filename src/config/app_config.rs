use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 26번 패턴은 상세 화면 대신 Lab 화면을 보여준다.
pub const DEFAULT_LAB_PATTERN_ID: i64 = 26;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Pattern Store
    pub content_path: PathBuf,
    pub lab_pattern_id: i64,

    // AI Service
    /// 서버 기본 키. 전술 생성은 항상 호출자의 키를 사용하므로 기본 키로 대체하지 않는다.
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_timeout: Duration,

    // Export
    pub pdf_font_dir: PathBuf,
    pub pdf_font_family: String,

    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            content_path: PathBuf::from("content.json"),
            lab_pattern_id: DEFAULT_LAB_PATTERN_ID,
            openai_api_key: None,
            openai_api_base: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_timeout: Duration::from_secs(60),
            pdf_font_dir: PathBuf::from("./fonts"),
            pdf_font_family: "NanumGothic".to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            Err(_) => defaults.port,
        };

        let lab_pattern_id = match env::var("LAB_PATTERN_ID") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidLabPatternId(value))?,
            Err(_) => defaults.lab_pattern_id,
        };

        let openai_timeout = match env::var("OPENAI_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(value))?,
            ),
            Err(_) => defaults.openai_timeout,
        };

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if openai_api_key.is_none() {
            tracing::debug!("OPENAI_API_KEY is not set; callers must supply their own key");
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            content_path: env::var("CONTENT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_path),
            lab_pattern_id,
            openai_api_key,
            openai_api_base: env::var("OPENAI_API_BASE").unwrap_or(defaults.openai_api_base),
            openai_model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_timeout,
            pdf_font_dir: env::var("PDF_FONT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.pdf_font_dir),
            pdf_font_family: env::var("PDF_FONT_FAMILY").unwrap_or(defaults.pdf_font_family),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid LAB_PATTERN_ID: {0}")]
    InvalidLabPatternId(String),
    #[error("Invalid OPENAI_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_should_listen_on_port_5000() {
        let config = AppConfig::default();

        assert_eq!(config.port, 5000);
        assert_eq!(config.lab_pattern_id, 26);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.content_path, PathBuf::from("content.json"));
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn bind_addr_should_join_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..AppConfig::default()
        };

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
