use std::str::FromStr;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::utils::error::AppError;

use super::docx::DOCX_CONTENT_TYPE;

/// 백업용 생성 기록 (클라이언트 보관)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogEntry {
    /// 업무 목적
    #[schema(example = "주간 보고서 자동화")]
    pub purpose: String,

    /// 생성 일자 (클라이언트 표기 그대로)
    #[schema(example = "2026. 10. 18. 오후 3:12:45")]
    pub date: String,

    /// 생성된 프롬프트 본문
    #[schema(example = "## 역할(Persona)\n...")]
    pub content: String,
}

/// 전체 백업 요청 DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct BackupRequest {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// 단건 내보내기 요청 DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct DownloadDocRequest {
    #[serde(default)]
    #[schema(example = "hello")]
    pub content: String,

    /// word | md | txt (기본값 txt)
    #[serde(default)]
    #[schema(example = "md")]
    pub format: Option<String>,
}

/// 지원하는 내보내기 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Word,
    Markdown,
    #[default]
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Word => "docx",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Word => DOCX_CONTENT_TYPE,
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// 요청 값 해석. 값이 없으면 txt.
    pub fn from_request(format: Option<&str>) -> Result<Self, AppError> {
        format.map_or(Ok(ExportFormat::default()), str::parse)
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(ExportFormat::Word),
            "md" => Ok(ExportFormat::Markdown),
            "txt" => Ok(ExportFormat::Text),
            _ => Err(AppError::UnsupportedExportFormat(s.to_string())),
        }
    }
}
