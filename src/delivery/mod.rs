//! Platform-aware document delivery.
//!
//! [`DeliverySurface`] abstracts the runtime the exporter delivers through
//! (object URLs, navigation, downloads, clipboard); [`DeliveryPolicy`]
//! applies the ordered channel decision over it. Different implementations
//! (browser binding, recording mocks) plug in without the policy changing.

pub mod policy;
pub mod traits;

pub use policy::{DeliveryPolicy, REVOKE_GRACE};
pub use traits::{DeliverySurface, ObjectUrl};
