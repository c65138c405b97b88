//! Service layer
//!
//! Services wrap outbound side effects in domain terms. The notifier turns
//! messaging client failures into [`DeliveryError`](crate::error::DeliveryError)
//! so no client error type leaks into the poller.

mod notifier;

// Re-export traits
pub use notifier::Notifier;

// Re-export implementations
pub use notifier::TelegramNotifier;
