//! 카탈로그 HTML 화면
//!
//! 서버 기동 시 Liquid 템플릿을 한 번 파싱해 두고 요청마다 렌더링만 수행한다.

use serde::Serialize;
use serde_json::Value;

use crate::utils::error::AppError;

use super::dto::PatternRecord;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>AI Prompt Patterns</title></head>
<body>
<h1>AI Prompt Patterns</h1>
<ul class="patterns">
{% for item in patterns %}<li><a href="/detail/{{ item.id }}">{{ item.title | escape }}</a></li>
{% endfor %}</ul>
<p><a href="/architect">Prompt Architect Lab</a></p>
</body>
</html>
"#;

const DETAIL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>{{ pattern.title | escape }}</title></head>
<body>
<nav><ul class="patterns">
{% for item in patterns %}<li><a href="/detail/{{ item.id }}">{{ item.title | escape }}</a></li>
{% endfor %}</ul></nav>
<article data-pattern-id="{{ pattern.id }}">
<h1>{{ pattern.title | escape }}</h1>
{% for field in pattern.fields %}<section class="field-{{ field.name | escape }}">
<h2>{{ field.name | escape }}</h2>
<pre>{{ field.value | escape }}</pre>
</section>
{% endfor %}</article>
{% if next_pattern %}<a class="next" href="/detail/{{ next_pattern.id }}">다음: {{ next_pattern.title | escape }}</a>
{% endif %}</body>
</html>
"#;

const LAB_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head><meta charset="utf-8"><title>Prompt Architect Lab</title></head>
<body>
<nav><ul class="patterns">
{% for item in patterns %}<li><a href="/detail/{{ item.id }}">{{ item.title | escape }}</a></li>
{% endfor %}</ul></nav>
<h1>Prompt Architect Lab</h1>
<form id="tactic-form" data-endpoint="/generate_tactic">
<textarea name="purpose"></textarea>
<button type="submit">Generate</button>
</form>
</body>
</html>
"#;

/// 목록/내비게이션용 요약
#[derive(Debug, Serialize)]
struct PatternLink {
    id: i64,
    title: String,
}

impl From<&PatternRecord> for PatternLink {
    fn from(record: &PatternRecord) -> Self {
        Self {
            id: record.id,
            title: record.title(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldView {
    name: String,
    value: String,
}

/// 상세 화면용 패턴
#[derive(Debug, Serialize)]
struct PatternView {
    id: i64,
    title: String,
    fields: Vec<FieldView>,
}

impl From<&PatternRecord> for PatternView {
    fn from(record: &PatternRecord) -> Self {
        let title_field = record.title_field();
        let fields = record
            .fields
            .iter()
            .filter(|(name, _)| Some(name.as_str()) != title_field)
            .map(|(name, value)| FieldView {
                name: name.clone(),
                value: display_value(value),
            })
            .collect();

        Self {
            id: record.id,
            title: record.title(),
            fields,
        }
    }
}

#[derive(Serialize)]
struct ListContext {
    patterns: Vec<PatternLink>,
}

#[derive(Serialize)]
struct DetailContext {
    pattern: PatternView,
    patterns: Vec<PatternLink>,
    next_pattern: Option<PatternLink>,
}

/// JSON 값을 사람이 읽을 수 있는 문자열로 변환
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// 파싱된 카탈로그 템플릿 모음
pub struct CatalogViews {
    index: liquid::Template,
    detail: liquid::Template,
    lab: liquid::Template,
}

impl CatalogViews {
    pub fn new() -> Result<Self, AppError> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| AppError::Internal(format!("template parser: {}", e)))?;

        let parse = |name: &str, source: &str| {
            parser
                .parse(source)
                .map_err(|e| AppError::Internal(format!("template {}: {}", name, e)))
        };

        Ok(Self {
            index: parse("index", INDEX_TEMPLATE)?,
            detail: parse("detail", DETAIL_TEMPLATE)?,
            lab: parse("lab", LAB_TEMPLATE)?,
        })
    }

    pub fn render_index(&self, patterns: &[PatternRecord]) -> Result<String, AppError> {
        render(&self.index, &ListContext {
            patterns: links(patterns),
        })
    }

    pub fn render_detail(
        &self,
        pattern: &PatternRecord,
        patterns: &[PatternRecord],
        next_pattern: Option<&PatternRecord>,
    ) -> Result<String, AppError> {
        render(&self.detail, &DetailContext {
            pattern: PatternView::from(pattern),
            patterns: links(patterns),
            next_pattern: next_pattern.map(PatternLink::from),
        })
    }

    pub fn render_lab(&self, patterns: &[PatternRecord]) -> Result<String, AppError> {
        render(&self.lab, &ListContext {
            patterns: links(patterns),
        })
    }
}

fn links(patterns: &[PatternRecord]) -> Vec<PatternLink> {
    patterns.iter().map(PatternLink::from).collect()
}

fn render<C: Serialize>(template: &liquid::Template, context: &C) -> Result<String, AppError> {
    let globals = liquid::to_object(context)
        .map_err(|e| AppError::Internal(format!("template context: {}", e)))?;
    template
        .render(&globals)
        .map_err(|e| AppError::Internal(format!("template render: {}", e)))
}
