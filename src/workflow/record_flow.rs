//! 记录处理流程 - 流程层
//!
//! 核心职责：定义"一条记录"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验并规范化（可能跳过）
//! 2. 发送 PATCH
//! 3. 按状态码分类并输出日志

use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};

use crate::clients::{RecordClient, UpdateResponse};
use crate::models::{Confirmation, Record, SkipReason, UpdateOutcome};
use crate::workflow::record_ctx::RecordCtx;

/// 记录处理流程
///
/// - 不持有统计数据，只返回 `UpdateOutcome`
/// - 每条记录最多发出一次请求
pub struct RecordFlow {
    client: RecordClient,
}

impl RecordFlow {
    pub fn new(client: RecordClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, record: &Record, ctx: &RecordCtx) -> UpdateOutcome {
        let (sys_id, u_label) = match normalize_record(record) {
            Ok(normalized) => normalized,
            Err(reason) => {
                let outcome = UpdateOutcome::Skipped(reason);
                log_outcome(ctx, &outcome);
                return outcome;
            }
        };

        info!(
            "{} Processing - sys_id: {}, u_label: '{}', number: {}",
            ctx, sys_id, u_label, ctx.number
        );

        if ctx.is_first() {
            debug!("  Payload being sent: {}", json!({ "u_label": &u_label }));
        }

        let response = self.client.send_update(sys_id, &u_label).await;
        let outcome = classify_response(response.as_ref(), &u_label);
        log_outcome(ctx, &outcome);

        outcome
    }
}

/// 校验并规范化一条记录
///
/// 依次检查：sys_id 缺失或为空、u_label 缺失或为空、去除首尾空白后为空。
/// 通过时返回 sys_id 与去除空白后的标签。
pub fn normalize_record(record: &Record) -> Result<(&str, String), SkipReason> {
    let sys_id = match record.sys_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(SkipReason::MissingSysId),
    };

    let u_label = match record.u_label.as_deref() {
        Some(label) if !label.is_empty() => label,
        _ => return Err(SkipReason::EmptyLabel),
    };

    let trimmed = u_label.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::EmptyAfterTrim);
    }

    Ok((sys_id, trimmed.to_string()))
}

/// 按状态码对响应分类
///
/// `None` 表示没有收到响应（传输层失败）。
/// 200 且 u_label 不一致时仍计为成功，只给出警告。
pub fn classify_response(response: Option<&UpdateResponse>, sent_label: &str) -> UpdateOutcome {
    let Some(response) = response else {
        return UpdateOutcome::TransportFailure;
    };

    match response.status {
        200 => UpdateOutcome::Success(confirm_label(&response.body, sent_label)),
        204 => UpdateOutcome::Success(Confirmation::NoContent),
        401 => UpdateOutcome::AuthFailure,
        403 => UpdateOutcome::Forbidden,
        404 => UpdateOutcome::NotFound,
        status => UpdateOutcome::UnexpectedStatus {
            status,
            body: response.body.clone(),
        },
    }
}

/// 从 200 响应体中读取 `result.u_label` 并与发送值比较
fn confirm_label(body: &str, sent_label: &str) -> Confirmation {
    let Ok(JsonValue::Object(document)) = serde_json::from_str::<JsonValue>(body) else {
        return Confirmation::Unconfirmed;
    };

    // 缺少 result 视为空对象
    let updated_label = match document.get("result") {
        None => String::new(),
        Some(JsonValue::Object(result)) => match result.get("u_label") {
            None => String::new(),
            Some(JsonValue::String(label)) => label.clone(),
            // 非字符串值永远不等于发送的标签
            Some(other) => {
                return Confirmation::Mismatch {
                    expected: sent_label.to_string(),
                    actual: other.to_string(),
                }
            }
        },
        Some(_) => return Confirmation::Unconfirmed,
    };

    if updated_label == sent_label {
        Confirmation::Confirmed(updated_label)
    } else {
        Confirmation::Mismatch {
            expected: sent_label.to_string(),
            actual: updated_label,
        }
    }
}

// ========== 日志辅助方法 ==========

fn log_skip(ctx: &RecordCtx, reason: SkipReason) {
    match reason {
        SkipReason::MissingSysId => {
            warn!("{} SKIPPED - {}, number: {}", ctx, reason, ctx.number);
        }
        SkipReason::EmptyLabel | SkipReason::EmptyAfterTrim => {
            warn!(
                "{} SKIPPED - {}, sys_id: {}, number: {}",
                ctx, reason, ctx.sys_id, ctx.number
            );
        }
    }
}

fn log_outcome(ctx: &RecordCtx, outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::Skipped(reason) => log_skip(ctx, *reason),
        UpdateOutcome::Success(Confirmation::Confirmed(label)) => {
            info!("{} ✓ SUCCESS: Update completed - u_label set to '{}'", ctx, label);
        }
        UpdateOutcome::Success(Confirmation::Mismatch { expected, actual }) => {
            warn!("{} ⚠ WARNING: Update returned status 200 but u_label mismatch!", ctx);
            warn!("    Expected: '{}', Got: '{}'", expected, actual);
        }
        UpdateOutcome::Success(Confirmation::Unconfirmed) => {
            info!(
                "{} ✓ SUCCESS: Update completed (status 200, but couldn't parse response)",
                ctx
            );
        }
        UpdateOutcome::Success(Confirmation::NoContent) => {
            info!("{} ✓ SUCCESS: Update completed (No Content)", ctx);
        }
        UpdateOutcome::AuthFailure => error!("{} ✗ ERROR: Authentication failed", ctx),
        UpdateOutcome::Forbidden => {
            error!("{} ✗ ERROR: Forbidden - Insufficient permissions", ctx);
        }
        UpdateOutcome::NotFound => error!("{} ✗ ERROR: Not Found - Record may not exist", ctx),
        UpdateOutcome::UnexpectedStatus { status, body } => {
            warn!("{} ⚠ WARNING: Unexpected status code: {}", ctx, status);
            warn!("    Response: {}", format_body(body));
        }
        UpdateOutcome::TransportFailure => {
            error!(
                "{} ✗ ERROR: Failed to update record (connection/timeout error)",
                ctx
            );
        }
    }
}

/// JSON 响应体格式化输出，否则原样返回
fn format_body(body: &str) -> String {
    serde_json::from_str::<JsonValue>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}
