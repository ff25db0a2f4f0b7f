//! 单条记录的处理结果与运行统计

use std::fmt;

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 缺少 sys_id
    MissingSysId,
    /// u_label 缺失或为空字符串
    EmptyLabel,
    /// u_label 去除首尾空白后为空
    EmptyAfterTrim,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSysId => write!(f, "Missing sys_id"),
            SkipReason::EmptyLabel => write!(f, "Empty u_label"),
            SkipReason::EmptyAfterTrim => write!(f, "Empty u_label after strip"),
        }
    }
}

/// 200/204 响应的确认程度
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// 响应中的 u_label 与发送值一致
    Confirmed(String),
    /// 响应中的 u_label 与发送值不一致，仍计为成功
    Mismatch { expected: String, actual: String },
    /// 200 但响应体无法解析
    Unconfirmed,
    /// 204，没有响应体
    NoContent,
}

/// 单条记录的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Skipped(SkipReason),
    Success(Confirmation),
    /// 401
    AuthFailure,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 其他状态码，保留原始响应体
    UnexpectedStatus { status: u16, body: String },
    /// 超时、连接失败等一切传输层错误
    TransportFailure,
}

/// 结果对应的计数器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    Success,
    Error,
    Skipped,
}

impl UpdateOutcome {
    pub fn tally(&self) -> Tally {
        match self {
            UpdateOutcome::Skipped(_) => Tally::Skipped,
            UpdateOutcome::Success(_) => Tally::Success,
            UpdateOutcome::AuthFailure
            | UpdateOutcome::Forbidden
            | UpdateOutcome::NotFound
            | UpdateOutcome::UnexpectedStatus { .. }
            | UpdateOutcome::TransportFailure => Tally::Error,
        }
    }

    /// 是否发出了网络请求
    pub fn reached_network(&self) -> bool {
        !matches!(self, UpdateOutcome::Skipped(_))
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    pub success_count: usize,
    pub error_count: usize,
    pub skipped_count: usize,
}

impl RunStatistics {
    pub fn record(&mut self, outcome: &UpdateOutcome) {
        match outcome.tally() {
            Tally::Success => self.success_count += 1,
            Tally::Error => self.error_count += 1,
            Tally::Skipped => self.skipped_count += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.error_count + self.skipped_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_outcome_hits_one_counter() {
        let outcomes = vec![
            UpdateOutcome::Skipped(SkipReason::MissingSysId),
            UpdateOutcome::Skipped(SkipReason::EmptyAfterTrim),
            UpdateOutcome::Success(Confirmation::Confirmed("Foo".to_string())),
            UpdateOutcome::Success(Confirmation::Mismatch {
                expected: "Foo".to_string(),
                actual: "Bar".to_string(),
            }),
            UpdateOutcome::Success(Confirmation::NoContent),
            UpdateOutcome::AuthFailure,
            UpdateOutcome::Forbidden,
            UpdateOutcome::NotFound,
            UpdateOutcome::UnexpectedStatus {
                status: 500,
                body: String::new(),
            },
            UpdateOutcome::TransportFailure,
        ];

        let mut stats = RunStatistics::default();
        for outcome in &outcomes {
            stats.record(outcome);
        }

        assert_eq!(stats.skipped_count, 2);
        assert_eq!(stats.success_count, 3);
        assert_eq!(stats.error_count, 5);
        assert_eq!(stats.total(), outcomes.len());
    }

    #[test]
    fn test_only_skips_stay_off_the_network() {
        assert!(!UpdateOutcome::Skipped(SkipReason::EmptyLabel).reached_network());
        assert!(UpdateOutcome::TransportFailure.reached_network());
    }
}
