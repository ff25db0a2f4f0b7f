use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppResult;

/// Apply `u_label` values from a processed JSON export to remote records
#[derive(Parser, Debug)]
#[command(name = "update_label", version)]
pub struct Cli {
    /// Input JSON file with a top-level `result` array
    #[arg(long, short)]
    pub input: Option<String>,
    /// TOML config file (fields default when absent)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Table endpoint; records are patched at <base-url>/<sys_id>
    #[arg(long)]
    pub base_url: Option<String>,
    /// Pause between requests in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// 构建最终配置：默认值 / 配置文件 → 环境变量 → 命令行参数
    pub fn resolve_config(&self) -> AppResult<Config> {
        let base = match &self.config {
            Some(path) => Config::from_toml_file(path)?,
            None => Config::default(),
        };

        let mut config = base.with_env_overrides();

        if let Some(input) = &self.input {
            config.input_file = input.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.request_delay_ms = delay_ms;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from([
            "update_label",
            "--input",
            "data/today.json",
            "--delay-ms",
            "0",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.input_file, "data/today.json");
        assert_eq!(config.request_delay_ms, 0);
        assert_eq!(config.timeout_secs, 5);
    }
}
