use std::sync::Arc;

use crate::config::AppConfig;
use crate::search::{QueryProfile, SearchError, SearchIndex, SolrClient};

/// Which Solr core a view talks to / 索引选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSelector {
    /// Plain document index / 普通索引
    Plain,
    /// Faceted index / 分面索引
    Faceted,
}

/// Shared, read-only application state / 共享只读状态
pub struct AppState {
    pub config: AppConfig,
    pub plain_index: Arc<dyn SearchIndex>,
    pub faceted_index: Arc<dyn SearchIndex>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        plain_index: Arc<dyn SearchIndex>,
        faceted_index: Arc<dyn SearchIndex>,
    ) -> Self {
        Self {
            config,
            plain_index,
            faceted_index,
        }
    }

    /// Build Solr clients for both cores from the configuration / 根据配置创建 Solr 客户端
    pub fn from_config(config: AppConfig) -> Result<Self, SearchError> {
        let timeout = config.solr_timeout();
        let plain = SolrClient::new(&config.solr.plain_index, timeout)?;
        let faceted = SolrClient::new(&config.solr.faceted_index, timeout)?;
        tracing::info!("Plain index: {}", plain.core_url());
        tracing::info!("Faceted index: {}", faceted.core_url());
        Ok(Self::new(config, Arc::new(plain), Arc::new(faceted)))
    }

    pub fn index(&self, selector: IndexSelector) -> &dyn SearchIndex {
        match selector {
            IndexSelector::Plain => self.plain_index.as_ref(),
            IndexSelector::Faceted => self.faceted_index.as_ref(),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.config.search.page_size
    }

    pub fn profile(&self, slot: usize) -> QueryProfile {
        self.config.profile(slot)
    }
}
