//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `TableStore` - Persistence of uploaded tables and computed results
//!
//! ## Delivery Ports
//!
//! - `ResultNotifier` - Sends a finished result file to the requester

mod result_notifier;
mod table_store;

pub use result_notifier::{DeliveryError, ResultAttachment, ResultNotifier};
pub use table_store::{FilePath, StorageError, TableStore};
