use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 通过 `RUST_LOG` 控制级别，默认 `info`
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
