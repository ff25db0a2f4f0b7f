use std::fmt;

/// 应用程序错误类型
///
/// 只有致命错误才会以 `AppError` 的形式向上传播；
/// 单条记录的失败由 `UpdateOutcome` 表达，不会中断运行。
#[derive(Debug)]
pub enum AppError {
    /// 输入文件错误
    File(FileError),
    /// 配置错误
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(e) => write!(f, "{}", e),
            AppError::Config(e) => write!(f, "Configuration error - {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

/// 输入文件错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound { path: String },
    /// 不是合法的 JSON
    InvalidJson {
        path: String,
        source: serde_json::Error,
    },
    /// 其他读取失败（I/O 错误、文档结构不符）
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "File not found - {}", path),
            FileError::InvalidJson { source, .. } => {
                write!(f, "Invalid JSON format - {}", source)
            }
            FileError::ReadFailed { source, .. } => {
                write!(f, "Failed to read file - {}", source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::NotFound { .. } => None,
            FileError::InvalidJson { source, .. } => Some(source),
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件读取或解析失败
    FileLoadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 请求头的值不合法
    InvalidHeader {
        header: &'static str,
        source: reqwest::header::InvalidHeaderValue,
    },
    /// HTTP 客户端构建失败
    ClientBuildFailed { source: reqwest::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileLoadFailed { path, source } => {
                write!(f, "cannot load config file {}: {}", path, source)
            }
            ConfigError::InvalidHeader { header, source } => {
                write!(f, "invalid value for header {}: {}", header, source)
            }
            ConfigError::ClientBuildFailed { source } => {
                write!(f, "cannot build HTTP client: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileLoadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            ConfigError::InvalidHeader { source, .. } => Some(source),
            ConfigError::ClientBuildFailed { source } => Some(source),
        }
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件不存在错误
    pub fn file_not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// 创建 JSON 格式错误
    pub fn invalid_json(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::File(FileError::InvalidJson {
            path: path.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建配置文件加载错误
    pub fn config_load_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::FileLoadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<FileError> for AppError {
    fn from(err: FileError) -> Self {
        AppError::File(err)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_errors_have_distinct_messages() {
        let not_found = AppError::file_not_found("data/missing.json").to_string();
        let bad_json =
            AppError::invalid_json("x", serde_json::from_str::<u8>("{").unwrap_err()).to_string();
        let read = AppError::file_read_failed(
            "x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .to_string();

        assert_eq!(not_found, "File not found - data/missing.json");
        assert!(bad_json.starts_with("Invalid JSON format - "));
        assert!(read.starts_with("Failed to read file - "));
    }
}
