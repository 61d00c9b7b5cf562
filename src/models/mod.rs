//! Data models for the contact export core.
//!
//! The contact record a card describes, and the outcome of an export
//! attempt. Both are immutable values; the record lives for the page
//! session, outcomes only long enough to drive one notification.

pub mod contact;
pub mod outcome;

pub use contact::{Address, ContactRecord};
pub use outcome::{DeliveryChannel, ExportOutcome, FailureReason};
