/// 日志工具模块
///
/// 提供启动信息与最终统计的输出
use crate::config::Config;
use crate::models::{Record, RunStatistics};
use tracing::{debug, info};

/// 摘要分隔线宽度
const SEPARATOR_WIDTH: usize = 50;

/// 调试输出中展示的样本记录数
const SAMPLE_SIZE: usize = 3;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
    info!(
        "🚀 Label update started - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 Endpoint: {}", config.base_url);
    info!(
        "⏱  Timeout: {}s, delay between requests: {}ms",
        config.timeout_secs, config.request_delay_ms
    );
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
}

pub fn log_loading(input_file: &str) {
    info!("Loading data from {}...", input_file);
}

/// 记录加载结果，并在 debug 级别输出前几条样本
pub fn log_records_loaded(records: &[Record]) {
    info!("Found {} records to process", records.len());

    debug!("First {} records sample:", SAMPLE_SIZE);
    for (i, record) in records.iter().take(SAMPLE_SIZE).enumerate() {
        debug!(
            "  Record {}: sys_id={}, u_label={}, number={}",
            i + 1,
            record.sys_id.as_deref().unwrap_or("None"),
            record
                .u_label
                .as_deref()
                .map(|label| format!("{:?}", label))
                .unwrap_or_else(|| "None".to_string()),
            record.display_number()
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `total`: 加载的记录总数
/// - `stats`: 运行统计
pub fn print_summary(total: usize, stats: &RunStatistics) {
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
    info!("SUMMARY");
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
    info!("Total records: {}", total);
    info!("Successful updates: {}", stats.success_count);
    info!("Failed updates: {}", stats.error_count);
    info!("Skipped records: {}", stats.skipped_count);
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
}
