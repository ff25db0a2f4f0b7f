//! 输入记录
//!
//! 对应输入文件 `{"result": [...]}` 中的每一项

use serde::Deserialize;

/// 待更新的记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// 远端资源的唯一标识
    #[serde(default)]
    pub sys_id: Option<String>,

    /// 要写入的标签，可能缺失或为 null
    #[serde(default)]
    pub u_label: Option<String>,

    /// 仅用于日志显示的编号
    #[serde(default)]
    pub number: Option<String>,
}

impl Record {
    /// 日志中显示的编号，缺失时为 `N/A`
    pub fn display_number(&self) -> &str {
        self.number.as_deref().unwrap_or("N/A")
    }
}

/// 输入文件的整体结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordBatch {
    #[serde(default)]
    pub result: Option<Vec<Record>>,
}

impl RecordBatch {
    pub fn into_records(self) -> Vec<Record> {
        self.result.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_label_and_missing_number() {
        let record: Record = serde_json::from_str(r#"{"sys_id": "a1", "u_label": null}"#).unwrap();
        assert_eq!(record.sys_id.as_deref(), Some("a1"));
        assert_eq!(record.u_label, None);
        assert_eq!(record.display_number(), "N/A");
    }

    #[test]
    fn test_batch_without_result_is_empty() {
        let batch: RecordBatch = serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert!(batch.into_records().is_empty());

        let batch: RecordBatch = serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert!(batch.into_records().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let batch: RecordBatch = serde_json::from_str(
            r#"{"result": [{"sys_id": "a", "u_label": "x", "number": "IMS001", "short_description": "hi"}]}"#,
        )
        .unwrap();
        let records = batch.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_number(), "IMS001");
    }
}
