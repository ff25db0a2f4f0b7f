pub mod loaders;
pub mod outcome;
pub mod record;

pub use loaders::load_records;
pub use outcome::{Confirmation, RunStatistics, SkipReason, Tally, UpdateOutcome};
pub use record::{Record, RecordBatch};
