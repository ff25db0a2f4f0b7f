use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 程序配置
///
/// 优先级：默认值 < TOML 配置文件 < 环境变量 < 命令行参数
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 记录表接口地址，实际请求为 `<base_url>/<sys_id>`
    pub base_url: String,
    /// `Authorization` 请求头
    pub auth_token: String,
    /// `Cookie` 请求头
    pub cookie: String,
    /// 单次请求超时（秒）
    pub timeout_secs: u64,
    /// 两次请求之间的间隔（毫秒）
    pub request_delay_ms: u64,
    /// 输入 JSON 文件
    pub input_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://instance.service-now.com/api/now/table/interaction".to_string(),
            auth_token: String::new(),
            cookie: String::new(),
            timeout_secs: 30,
            request_delay_ms: 100,
            input_file: "data/chat_interactions_processed.json".to_string(),
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::config_load_failed(path.display().to_string(), e))?;

        toml::from_str(&content)
            .map_err(|e| AppError::config_load_failed(path.display().to_string(), e))
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            base_url: std::env::var("RECORD_API_BASE_URL").unwrap_or(self.base_url),
            auth_token: std::env::var("RECORD_API_AUTH_TOKEN").unwrap_or(self.auth_token),
            cookie: std::env::var("RECORD_API_COOKIE").unwrap_or(self.cookie),
            timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.timeout_secs),
            request_delay_ms: std::env::var("REQUEST_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.request_delay_ms),
            input_file: std::env::var("INPUT_FILE").unwrap_or(self.input_file),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// 拼接单条记录的请求地址
    pub fn record_url(&self, sys_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), sys_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.request_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_record_url_tolerates_trailing_slash() {
        let mut config = Config::default();
        config.base_url = "http://localhost:8080/api/now/table/interaction/".to_string();
        assert_eq!(
            config.record_url("abc123"),
            "http://localhost:8080/api/now/table/interaction/abc123"
        );
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://127.0.0.1:9000/table\"").unwrap();
        writeln!(file, "request_delay_ms = 0").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/table");
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_missing_toml_is_config_error() {
        let err = Config::from_toml_file(Path::new("/nonexistent/update_label.toml")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
