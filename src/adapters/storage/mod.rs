//! Storage adapters for decision tables.

mod in_memory_table_store;
mod local_csv_store;

pub use in_memory_table_store::InMemoryTableStore;
pub use local_csv_store::{LocalCsvTableStore, DEFAULT_MAX_FILE_BYTES};
