//! Application configuration module / 应用配置模块
//!
//! Loads configuration from config.json once at startup.
//! Creates default config file on first run / 首次运行时创建默认配置文件
//!
//! The loaded [`AppConfig`] is immutable and handed to the router and search clients
//! explicitly; there is no global instance.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Solr connection configuration / Solr连接配置
    #[serde(default)]
    pub solr: SolrConfig,
    /// Search page configuration / 搜索页面配置
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Solr configuration / Solr配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolrConfig {
    /// Plain document core URL / 普通索引地址
    pub plain_index: String,
    /// Faceted core URL / 分面索引地址
    pub faceted_index: String,
    /// Request timeout in seconds / 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Query profiles, selected by slot number per search view / 查询配置槽
    ///
    /// Each entry is a set of extra Solr request parameters (`sort`, `defType`, `qf`...).
    /// A view pointing at a slot that does not exist sends no extra parameters.
    #[serde(default)]
    pub profiles: Vec<BTreeMap<String, String>>,
}

/// Search page configuration / 搜索页面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results per page / 每页结果数
    pub page_size: u32,
    /// Fields offered as facet keys on faceted views / 可选分面字段
    #[serde(default)]
    pub facet_fields: Vec<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for SolrConfig {
    fn default() -> Self {
        Self {
            plain_index: "http://localhost:8983/solr/index0".to_string(),
            faceted_index: "http://localhost:8983/solr/index1".to_string(),
            timeout_secs: default_timeout_secs(),
            profiles: Vec::new(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            facet_fields: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the Solr request timeout / 获取Solr请求超时
    pub fn solr_timeout(&self) -> Duration {
        Duration::from_secs(self.solr.timeout_secs)
    }

    /// Get the extra parameters of a profile slot / 获取查询配置槽参数
    pub fn profile(&self, slot: usize) -> BTreeMap<String, String> {
        self.solr.profiles.get(slot).cloned().unwrap_or_default()
    }

    /// Apply environment variable overrides / 应用环境变量覆盖
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SOLR_INDEX_0") {
            self.solr.plain_index = v;
        }
        if let Some(v) = lookup("SOLR_INDEX_1") {
            self.solr.faceted_index = v;
        }
        if let Some(v) = lookup("NUM_RECS_PER_PAGE") {
            self.search.page_size = v
                .trim()
                .parse()
                .map_err(|e| format!("Invalid NUM_RECS_PER_PAGE '{}': {}", v, e))?;
        }
        if let Some(v) = lookup("SOLR_TIMEOUT_SECS") {
            self.solr.timeout_secs = v
                .trim()
                .parse()
                .map_err(|e| format!("Invalid SOLR_TIMEOUT_SECS '{}': {}", v, e))?;
        }
        if let Some(v) = lookup("WEBTOOL_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("WEBTOOL_PORT") {
            self.server.port = v
                .trim()
                .parse()
                .map_err(|e| format!("Invalid WEBTOOL_PORT '{}': {}", v, e))?;
        }
        Ok(())
    }

    /// Check value ranges and URLs / 校验配置
    pub fn validate(&self) -> Result<(), String> {
        if self.search.page_size == 0 {
            return Err("search.page_size must be at least 1".to_string());
        }
        if self.solr.timeout_secs == 0 {
            return Err("solr.timeout_secs must be at least 1".to_string());
        }
        for (name, value) in [
            ("solr.plain_index", &self.solr.plain_index),
            ("solr.faceted_index", &self.solr.faceted_index),
        ] {
            url::Url::parse(value).map_err(|e| format!("Invalid {} '{}': {}", name, value, e))?;
        }
        Ok(())
    }
}

/// Get the config file path / 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from config.json plus environment overrides / 加载配置
pub fn load_config() -> Result<AppConfig, String> {
    let mut config = load_config_from(&get_config_path())?;
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    if config_path.exists() {
        // Load existing config / 加载现有配置
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        // Create default config / 创建默认配置
        let config = AppConfig::default();
        save_config(config_path, &config)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config(config_path: &Path, config: &AppConfig) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.search.page_size, 10);
        assert!(path.exists());

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded.solr.plain_index, config.solr.plain_index);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"search": {"page_size": 25}, "solr": {"plain_index": "http://solr:8983/solr/a", "faceted_index": "http://solr:8983/solr/b", "profiles": [{"sort": "score desc"}]}}"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.search.page_size, 25);
        assert_eq!(config.solr.timeout_secs, 10);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.profile(0).get("sort").map(String::as_str), Some("score desc"));
        assert!(config.profile(3).is_empty());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("SOLR_INDEX_0", "http://other:8983/solr/plain"),
            ("NUM_RECS_PER_PAGE", "20"),
            ("WEBTOOL_PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.solr.plain_index, "http://other:8983/solr/plain");
        assert_eq!(config.search.page_size, 20);
        assert_eq!(config.get_bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_bad_env_override_is_error() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|k| {
            (k == "NUM_RECS_PER_PAGE").then(|| "many".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let mut config = AppConfig::default();
        config.search.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.solr.faceted_index = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
