//! 批量记录处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责加载记录并逐条调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：输出启动信息、构建 `RecordClient`
//! 2. **加载记录**：读取输入 JSON（失败即终止）
//! 3. **顺序处理**：逐条交给 `RecordFlow`，请求之间固定间隔
//! 4. **全局统计**：汇总 `RunStatistics` 并输出摘要

use crate::clients::RecordClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_records, Record, RunStatistics};
use crate::utils::logging;
use crate::workflow::{RecordCtx, RecordFlow};
use std::path::Path;
use tokio::time::sleep;
use tracing::warn;

/// 应用主结构
pub struct App {
    config: Config,
    flow: RecordFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        logging::log_startup(&config);

        let client = RecordClient::new(&config)?;

        Ok(Self {
            config,
            flow: RecordFlow::new(client),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 只有输入文件加载失败会返回错误；单条记录的失败只计入统计。
    pub async fn run(&self) -> AppResult<RunStatistics> {
        logging::log_loading(&self.config.input_file);
        let records = load_records(Path::new(&self.config.input_file)).await?;

        logging::log_records_loaded(&records);

        if records.is_empty() {
            warn!("⚠️ No records found in {}", self.config.input_file);
        }

        let stats = self.process_records(&records).await;

        logging::print_summary(records.len(), &stats);

        Ok(stats)
    }

    /// 按输入顺序逐条处理记录
    ///
    /// 发出过请求的记录之后（最后一条除外）暂停 `request_delay`。
    pub async fn process_records(&self, records: &[Record]) -> RunStatistics {
        let total = records.len();
        let delay = self.config.request_delay();
        let mut stats = RunStatistics::default();

        for (idx, record) in records.iter().enumerate() {
            let ctx = RecordCtx::new(idx + 1, total, record);
            let outcome = self.flow.run(record, &ctx).await;
            stats.record(&outcome);

            if outcome.reached_network() && !ctx.is_last() && !delay.is_zero() {
                sleep(delay).await;
            }
        }

        stats
    }
}
