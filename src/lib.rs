//! # Update Label
//!
//! 将预处理好的 JSON 导出文件中的 `u_label` 逐条写回远端记录表
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - `RecordClient`，单次 PATCH，传输层错误统一折叠
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一条记录"的完整处理流程
//! - `RecordCtx` - 上下文封装（位置 + 标识）
//! - `RecordFlow` - 流程编排（校验 → 发送 → 分类 → 日志）
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 加载记录、顺序调度、统计汇总
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{RecordClient, UpdateResponse};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{load_records, Confirmation, Record, RunStatistics, SkipReason, UpdateOutcome};
pub use orchestrator::App;
pub use workflow::{classify_response, normalize_record, RecordCtx, RecordFlow};
