//! Adapters - Implementations of ports for external systems.
//!
//! - `http` - Axum REST endpoints
//! - `notification` - Result delivery (Resend, mock, disabled)
//! - `storage` - Table persistence (local filesystem, in-memory)

pub mod http;
pub mod notification;
pub mod storage;
