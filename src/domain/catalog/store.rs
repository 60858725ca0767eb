use std::path::{Path, PathBuf};

use crate::utils::error::AppError;

use super::dto::{PatternDocument, PatternRecord};

/// 파일 기반 읽기 전용 패턴 저장소
///
/// 캐시 없이 호출될 때마다 파일을 새로 읽고 파싱한다.
#[derive(Debug, Clone)]
pub struct PatternStore {
    path: PathBuf,
}

impl PatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 전체 패턴 목록을 파일 순서대로 로드
    pub async fn load(&self) -> Result<Vec<PatternRecord>, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::PatternStore(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let document: PatternDocument = serde_json::from_str(&raw).map_err(|e| {
            AppError::PatternStore(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(
            count = document.prompt_patterns.len(),
            "Pattern store loaded"
        );

        Ok(document.prompt_patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn should_load_patterns_in_file_order() {
        let file = write_fixture(
            r#"{"prompt_patterns": [{"id": 10, "title": "B"}, {"id": 2, "title": "A"}]}"#,
        );
        let store = PatternStore::new(file.path());

        let patterns = store.load().await.unwrap();

        let ids: Vec<_> = patterns.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 2]);
    }

    #[tokio::test]
    async fn should_reread_file_on_every_load() {
        let file = write_fixture(r#"{"prompt_patterns": [{"id": 1}]}"#);
        let store = PatternStore::new(file.path());
        assert_eq!(store.load().await.unwrap().len(), 1);

        std::fs::write(
            file.path(),
            r#"{"prompt_patterns": [{"id": 1}, {"id": 2}]}"#,
        )
        .unwrap();

        assert_eq!(store.load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_fail_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = PatternStore::new(dir.path().join("missing.json"));

        let result = store.load().await;

        assert!(matches!(result, Err(AppError::PatternStore(_))));
    }

    #[tokio::test]
    async fn should_fail_when_file_is_malformed() {
        let file = write_fixture("{ not json");
        let store = PatternStore::new(file.path());

        let result = store.load().await;

        assert!(matches!(result, Err(AppError::PatternStore(_))));
    }
}
