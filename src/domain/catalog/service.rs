use crate::utils::error::AppError;

use super::dto::PatternRecord;
use super::store::PatternStore;

/// 상세 조회 결과
#[derive(Debug, PartialEq)]
pub enum DetailPage {
    /// Lab 패턴: 단건 대신 전체 목록으로 Lab 화면을 그린다
    Lab { patterns: Vec<PatternRecord> },
    Detail {
        pattern: PatternRecord,
        next_pattern: Option<PatternRecord>,
        patterns: Vec<PatternRecord>,
    },
}

pub struct CatalogService;

impl CatalogService {
    /// 전체 패턴 목록
    pub async fn list_patterns(store: &PatternStore) -> Result<Vec<PatternRecord>, AppError> {
        store.load().await
    }

    /// 패턴 상세 조회
    ///
    /// id는 배열 인덱스가 아니라 값 비교로 찾고, 다음 패턴은 id 순서와 무관하게
    /// 로드된 목록에서 바로 뒤 원소로 정한다.
    pub async fn show_detail(
        store: &PatternStore,
        lab_pattern_id: i64,
        pattern_id: i64,
    ) -> Result<DetailPage, AppError> {
        let patterns = store.load().await?;

        let index = find_pattern_index(&patterns, pattern_id).ok_or_else(|| {
            AppError::NotFound(format!("존재하지 않는 패턴입니다: {}", pattern_id))
        })?;

        if pattern_id == lab_pattern_id {
            tracing::debug!(pattern_id, "Rendering lab view for lab pattern");
            return Ok(DetailPage::Lab { patterns });
        }

        let pattern = patterns[index].clone();
        let next_pattern = patterns.get(index + 1).cloned();

        Ok(DetailPage::Detail {
            pattern,
            next_pattern,
            patterns,
        })
    }
}

/// 첫 번째로 id가 일치하는 레코드의 위치
pub fn find_pattern_index(patterns: &[PatternRecord], pattern_id: i64) -> Option<usize> {
    patterns.iter().position(|p| p.id == pattern_id)
}
