//! Search module - client side of an external Solr service / 搜索模块
//!
//! Architecture principles / 架构原则：
//! - Ranking, indexing and faceting are owned by Solr; this module only builds requests and decodes responses
//! - One `SolrClient` per Solr core (plain index, faceted index)
//! - Handlers depend on the `SearchIndex` trait, not on the HTTP client / 路由只依赖 trait

pub mod client;
pub mod error;
pub mod schema;
pub mod solr;

pub use client::{SearchIndex, SolrClient};
pub use error::SearchError;
pub use schema::{Document, FacetCount, FacetSummary, Query, QueryProfile, ResultPage};
