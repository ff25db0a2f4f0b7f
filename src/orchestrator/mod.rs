//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<Record>)
//!     ↓
//! workflow::RecordFlow (处理单条 Record)
//!     ↓
//! clients::RecordClient (单次 PATCH)
//! ```

pub mod batch_processor;

pub use batch_processor::App;
