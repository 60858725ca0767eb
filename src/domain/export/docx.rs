//! 최소 구성의 Word(.docx) 문서 작성기
//!
//! 제목, 헤딩, 본문 단락, 페이지 나누기만 지원한다. 결과물은 OOXML 패키지(zip)이다.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::CompressionMethod;

use crate::utils::error::AppError;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="160"/></w:pPr><w:rPr><w:sz w:val="22"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:rPr><w:b/><w:sz w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading3"><w:name w:val="heading 3"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="2"/></w:pPr><w:rPr><w:b/><w:sz w:val="24"/></w:rPr></w:style></w:styles>"#;

/// A4, 1인치 여백
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

/// Word 문서 빌더
#[derive(Debug, Default)]
pub struct DocxBuilder {
    body: String,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 문서 제목 (Title 스타일)
    pub fn title(&mut self, text: &str) -> &mut Self {
        self.push_paragraph(Some("Title"), text);
        self
    }

    /// 헤딩. 레벨은 1~3으로 제한된다.
    pub fn heading(&mut self, text: &str, level: u8) -> &mut Self {
        let style = format!("Heading{}", level.clamp(1, 3));
        self.push_paragraph(Some(&style), text);
        self
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.push_paragraph(None, text);
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.body.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
        self
    }

    fn push_paragraph(&mut self, style: Option<&str>, text: &str) {
        self.body.push_str("<w:p>");
        if let Some(style) = style {
            self.body
                .push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style));
        }
        self.body.push_str("<w:r>");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.body.push_str("<w:br/>");
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.body.push_str(r#"<w:t xml:space="preserve">"#);
            self.body.push_str(&escape_xml(line));
            self.body.push_str("</w:t>");
        }
        self.body.push_str("</w:r></w:p>");
    }

    fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}{}</w:body></w:document>"#,
            WORD_NS, self.body, SECTION_PROPERTIES
        )
    }

    /// OOXML 패키지 바이트 생성
    pub fn build(&self) -> Result<Vec<u8>, AppError> {
        let document_xml = self.document_xml();
        let parts: [(&str, &[u8]); 5] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
            ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
            ("word/styles.xml", STYLES_XML.as_bytes()),
            ("word/document.xml", document_xml.as_bytes()),
        ];

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, bytes) in parts {
            zip.start_file(name, options).map_err(|e| {
                AppError::DocumentGenerationFailed(format!("zip entry {}: {}", name, e))
            })?;
            zip.write_all(bytes).map_err(|e| {
                AppError::DocumentGenerationFailed(format!("zip write {}: {}", name, e))
            })?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| AppError::DocumentGenerationFailed(format!("zip finalize: {}", e)))?;

        Ok(cursor.into_inner())
    }
}

/// XML 텍스트 노드용 이스케이프. XML 1.0에서 허용되지 않는 제어 문자는 제거한다.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push('\t'),
            c if (c as u32) < 0x20 => {}
            c => escaped.push(c),
        }
    }
    escaped
}
