//! 수료 인증서 PDF

use std::path::Path;

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::{style, Alignment, Element};
use tracing::warn;

use crate::utils::error::AppError;

pub const CERTIFICATE_FILENAME: &str = "Official_Certificate.pdf";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// 인증서 수령인 (고정)
pub const RECIPIENT: &str = "PROMPT MASTER";

/// 인증서 한 줄: (텍스트, 글자 크기, 굵게 여부, 앞쪽 여백 줄 수)
struct CertificateLine {
    text: &'static str,
    font_size: u8,
    bold: bool,
    space_before: f64,
}

const CERTIFICATE_LINES: [CertificateLine; 4] = [
    CertificateLine {
        text: "CERTIFICATE OF COMPLETION",
        font_size: 24,
        bold: true,
        space_before: 6.0,
    },
    CertificateLine {
        text: "This is to certify that",
        font_size: 16,
        bold: false,
        space_before: 3.0,
    },
    CertificateLine {
        text: RECIPIENT,
        font_size: 30,
        bold: true,
        space_before: 1.5,
    },
    CertificateLine {
        text: "has successfully mastered the AI Prompting Master Course.",
        font_size: 14,
        bold: false,
        space_before: 1.5,
    },
];

/// 폰트 패밀리 로딩
///
/// `{family}-Regular/Bold/Italic/BoldItalic.ttf` 전체를 우선 시도하고,
/// 실패하면 Regular 폰트 하나로 네 스타일을 모두 채운다.
pub fn load_font_family(font_dir: &Path, family: &str) -> Result<FontFamily<FontData>, AppError> {
    match genpdf::fonts::from_files(font_dir, family, None) {
        Ok(font_family) => Ok(font_family),
        Err(full_err) => {
            warn!(
                "전체 폰트 패밀리 로딩 실패 ({}), Regular 폰트로 대체합니다.",
                full_err
            );
            let regular_path = font_dir.join(format!("{}-Regular.ttf", family));
            let font_bytes = std::fs::read(&regular_path).map_err(|e| {
                AppError::PdfGenerationFailed(format!(
                    "Regular 폰트 파일 읽기 실패 ({}) : {}",
                    regular_path.display(),
                    e
                ))
            })?;

            let load = |bytes: Vec<u8>| {
                FontData::new(bytes, None).map_err(|e| {
                    AppError::PdfGenerationFailed(format!("폰트 데이터 로딩 실패: {}", e))
                })
            };

            Ok(FontFamily {
                regular: load(font_bytes.clone())?,
                bold: load(font_bytes.clone())?,
                italic: load(font_bytes.clone())?,
                bold_italic: load(font_bytes)?,
            })
        }
    }
}

/// 고정 레이아웃 인증서 렌더링
pub fn render_certificate(font_family: FontFamily<FontData>) -> Result<Vec<u8>, AppError> {
    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("Certificate of Completion");
    doc.set_minimal_conformance();

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(15);
    doc.set_page_decorator(decorator);

    for line in &CERTIFICATE_LINES {
        doc.push(Break::new(line.space_before));

        let mut line_style = style::Style::new().with_font_size(line.font_size);
        if line.bold {
            line_style = line_style.bold();
        }

        doc.push(
            Paragraph::new(line.text)
                .aligned(Alignment::Center)
                .styled(line_style),
        );
    }

    let mut buf = Vec::new();
    doc.render(&mut buf)
        .map_err(|e| AppError::PdfGenerationFailed(format!("PDF 렌더링 실패: {}", e)))?;

    Ok(buf)
}

/// 폰트 로딩부터 렌더링까지 한 번에 수행
pub fn generate_certificate(font_dir: &Path, family: &str) -> Result<Vec<u8>, AppError> {
    let font_family = load_font_family(font_dir, family)?;
    let pdf = render_certificate(font_family)?;

    tracing::info!(pdf_size = pdf.len(), "Certificate PDF generated");

    Ok(pdf)
}
