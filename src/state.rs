use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::catalog::{CatalogViews, PatternStore};
use crate::domain::tactic::{AiClient, TacticService};
use crate::utils::error::AppError;

/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pattern_store: PatternStore,
    pub views: Arc<CatalogViews>,
    pub tactic_service: TacticService,
}

impl AppState {
    /// 템플릿 파싱에 실패하면 기동하지 않는다.
    pub fn new(config: AppConfig, ai_client: AiClient) -> Result<Self, AppError> {
        let pattern_store = PatternStore::new(config.content_path.clone());
        let views = CatalogViews::new()?;

        Ok(Self {
            config: Arc::new(config),
            pattern_store,
            views: Arc::new(views),
            tactic_service: TacticService::new(ai_client),
        })
    }
}
