use crate::utils::error::AppError;
use crate::utils::response::FileDownload;

use super::docx::{DocxBuilder, DOCX_CONTENT_TYPE};
use super::dto::{ExportFormat, LogEntry};

pub const BIBLE_FILENAME: &str = "My_Prompt_Bible.docx";
pub const BIBLE_TITLE: &str = "My AI Prompt Bible";
pub const EXPORT_TITLE: &str = "AI 실무 프롬프트 결과물";

pub struct ExportService;

impl ExportService {
    /// 생성 기록 전체를 하나의 Word 문서로 묶는다.
    ///
    /// 입력 순서대로 (헤딩, 생성일자, 본문, 페이지 나누기)를 반복한다.
    pub fn backup_all(logs: &[LogEntry]) -> Result<FileDownload, AppError> {
        let mut doc = DocxBuilder::new();
        doc.title(BIBLE_TITLE);

        for log in logs {
            doc.heading(&format!("업무 목적: {}", log.purpose), 1)
                .paragraph(&format!("생성일자: {}", log.date))
                .paragraph(&log.content)
                .page_break();
        }

        let bytes = doc.build()?;
        tracing::info!(
            log_count = logs.len(),
            size = bytes.len(),
            "Prompt bible generated"
        );

        Ok(FileDownload::new(BIBLE_FILENAME, DOCX_CONTENT_TYPE, bytes))
    }

    /// 단건 내보내기. 파일명은 `Prompt_Export_<unix초>.<확장자>`.
    pub fn export_one(
        content: &str,
        format: ExportFormat,
        timestamp: i64,
    ) -> Result<FileDownload, AppError> {
        let filename = format!("Prompt_Export_{}.{}", timestamp, format.extension());

        let bytes = match format {
            ExportFormat::Word => DocxBuilder::new()
                .title(EXPORT_TITLE)
                .paragraph(content)
                .build()?,
            ExportFormat::Markdown | ExportFormat::Text => content.as_bytes().to_vec(),
        };

        tracing::info!(
            format = format.extension(),
            size = bytes.len(),
            "Single export generated"
        );

        Ok(FileDownload::new(filename, format.content_type(), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name("word/document.xml").unwrap();
        let mut xml = String::new();
        part.read_to_string(&mut xml).unwrap();
        xml
    }

    fn log(purpose: &str, date: &str, content: &str) -> LogEntry {
        LogEntry {
            purpose: purpose.to_string(),
            date: date.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn backup_all_should_write_entries_in_input_order() {
        let logs = vec![
            log("첫번째 목적", "2026-10-01", "첫번째 본문"),
            log("두번째 목적", "2026-10-02", "두번째 본문"),
        ];

        let download = ExportService::backup_all(&logs).unwrap();
        let xml = document_xml(&download.bytes);

        assert_eq!(download.filename, BIBLE_FILENAME);
        let first = xml.find("업무 목적: 첫번째 목적").unwrap();
        let second = xml.find("업무 목적: 두번째 목적").unwrap();
        assert!(first < second);
        assert!(xml.contains("생성일자: 2026-10-02"));
        assert_eq!(xml.matches(r#"w:type="page""#).count(), 2);
    }

    #[test]
    fn backup_all_with_no_logs_should_contain_only_title() {
        let download = ExportService::backup_all(&[]).unwrap();
        let xml = document_xml(&download.bytes);

        assert!(xml.contains(BIBLE_TITLE));
        assert_eq!(xml.matches("<w:p>").count(), 1);
    }

    #[test]
    fn export_one_markdown_should_write_raw_bytes() {
        let download =
            ExportService::export_one("hello", ExportFormat::Markdown, 1_700_000_000).unwrap();

        assert_eq!(download.filename, "Prompt_Export_1700000000.md");
        assert_eq!(download.bytes, b"hello");
    }

    #[test]
    fn export_one_text_should_keep_utf8() {
        let download = ExportService::export_one("한글 프롬프트", ExportFormat::Text, 42).unwrap();

        assert_eq!(download.filename, "Prompt_Export_42.txt");
        assert_eq!(String::from_utf8(download.bytes).unwrap(), "한글 프롬프트");
    }

    #[test]
    fn export_one_word_should_wrap_content_in_document() {
        let download = ExportService::export_one("본문 내용", ExportFormat::Word, 7).unwrap();
        let xml = document_xml(&download.bytes);

        assert_eq!(download.filename, "Prompt_Export_7.docx");
        assert_eq!(download.content_type, DOCX_CONTENT_TYPE);
        assert!(xml.contains(EXPORT_TITLE));
        assert!(xml.contains("본문 내용"));
    }
}
