pub mod metrics;
pub mod store;

pub use self::metrics::{get_metrics, init_metrics, record_store_call, record_submission};
pub use self::store::{persist_or_log, StorageOutcome, StoreError, SubmissionStore, SupabaseStore};
