use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 프롬프트 패턴 레코드
///
/// `id`만 서버가 해석하고, 나머지 필드는 화면 표시용으로 순서를 유지한 채 보관한다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PatternRecord {
    pub id: i64,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl PatternRecord {
    /// 표시용 제목: `title` → `name` → `Pattern #<id>`
    pub fn title(&self) -> String {
        self.title_field()
            .and_then(|key| self.fields.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Pattern #{}", self.id))
    }

    /// 제목으로 사용된 필드 이름
    pub fn title_field(&self) -> Option<&'static str> {
        ["title", "name"]
            .into_iter()
            .find(|key| self.fields.get(*key).and_then(Value::as_str).is_some())
    }
}

/// `content.json` 최상위 문서
#[derive(Debug, Deserialize)]
pub struct PatternDocument {
    #[serde(default)]
    pub prompt_patterns: Vec<PatternRecord>,
}
