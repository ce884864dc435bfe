//! Result delivery adapters.

mod disabled_notifier;
mod mock_notifier;
mod resend_notifier;

pub use disabled_notifier::DisabledNotifier;
pub use mock_notifier::{MockResultNotifier, SentResult};
pub use resend_notifier::{ResendConfig, ResendNotifier, DEFAULT_SUBJECT};
