use crate::error::{AppError, AppResult};
use crate::models::record::{Record, RecordBatch};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载全部待更新记录
///
/// 文档必须是包含 `result` 字段的对象；`result` 缺失或为 null 时返回空列表。
/// 记录顺序与文件中一致。
///
/// # 错误
/// - 文件不存在 → `FileError::NotFound`
/// - 不是合法 JSON → `FileError::InvalidJson`
/// - 其他读取失败或结构不符 → `FileError::ReadFailed`
pub async fn load_records(file_path: &Path) -> AppResult<Vec<Record>> {
    let path_str = file_path.display().to_string();

    let content = fs::read_to_string(file_path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::file_not_found(&path_str),
            _ => AppError::file_read_failed(&path_str, e),
        })?;

    // 先按通用 JSON 解析，区分"语法错误"与"结构不符"
    let document: Value =
        serde_json::from_str(&content).map_err(|e| AppError::invalid_json(&path_str, e))?;

    if !document.is_object() {
        return Err(AppError::file_read_failed(
            &path_str,
            std::io::Error::new(ErrorKind::InvalidData, "expected a JSON object at top level"),
        ));
    }

    let batch: RecordBatch =
        serde_json::from_value(document).map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let records = batch.into_records();
    tracing::debug!("从 {} 加载了 {} 条记录", path_str, records.len());

    Ok(records)
}
