//! 记录处理上下文
//!
//! 封装"我正在处理第几条记录"这一信息

use crate::models::Record;
use std::fmt::Display;

/// 记录处理上下文
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// 记录位置（从1开始）
    pub index: usize,

    /// 记录总数
    pub total: usize,

    /// 日志中显示的 sys_id
    pub sys_id: String,

    /// 日志中显示的编号
    pub number: String,
}

impl RecordCtx {
    pub fn new(index: usize, total: usize, record: &Record) -> Self {
        Self {
            index,
            total,
            sys_id: record.sys_id.clone().unwrap_or_default(),
            number: record.display_number().to_string(),
        }
    }

    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    pub fn is_last(&self) -> bool {
        self.index >= self.total
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}]", self.index, self.total)
    }
}
