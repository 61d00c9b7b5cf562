//! E-Card Exporter - the contact export core of a digital business card.
//!
//! This library takes a validated contact record and produces a vCard 3.0
//! document, delivering it through the best channel the runtime environment
//! offers (native download, navigable open, clipboard fallback). It also
//! builds the WhatsApp deep link for the card's messaging action.
//!
//! # Architecture
//!
//! - **models**: Contact record, address, and export outcome values
//! - **domain**: Validated value objects (phone numbers, email addresses)
//! - **config**: Card configuration loading and validation
//! - **vcard**: Pure vCard document generation and file naming
//! - **environment**: Client environment detection behind a probe seam
//! - **delivery**: Delivery surface abstraction and the ordered channel policy
//! - **messaging**: Chat deep-link construction
//! - **notify**: Notification collaborator interface
//! - **services**: The exporter service tying it all together
//! - **observability**: Logging initialization and export metrics

pub mod config;
pub mod delivery;
pub mod domain;
pub mod environment;
pub mod error;
pub mod messaging;
pub mod models;
pub mod notify;
pub mod observability;
pub mod services;
pub mod vcard;

pub use config::CardConfig;
pub use delivery::{DeliveryPolicy, DeliverySurface, ObjectUrl, REVOKE_GRACE};
pub use environment::{EnvironmentProbe, EnvironmentProfile, StaticProbe, UserAgentProbe};
pub use error::{ConfigError, ConfigResult, ExportError, ExportResult};
pub use models::{Address, ContactRecord, DeliveryChannel, ExportOutcome, FailureReason};
pub use notify::{Notifier, Severity, TracingNotifier};
pub use observability::ExportMetrics;
pub use services::ContactCardExporter;
