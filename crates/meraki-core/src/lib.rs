//! Dashboard aggregation for the Meraki Dashboard API.
//!
//! Resolves the first organization and its first network, pulls that
//! network's devices and clients, and folds them into a
//! [`DashboardSnapshot`]. Upstream failures never surface as errors here:
//! every fetch yields a [`FetchOutcome`], and only a missing organization or
//! network aborts the snapshot.

pub mod aggregate;
pub mod error;
pub mod outcome;
pub mod snapshot;
pub mod source;

pub use aggregate::{DEFAULT_CLIENT_TIMESPAN_SECS, build_snapshot};
pub use error::DashboardError;
pub use outcome::FetchOutcome;
pub use snapshot::{DashboardSnapshot, DeviceTypeTally};
pub use source::DashboardSource;

// Re-export the upstream models so consumers don't need a direct
// `meraki-api` dependency for the common types.
pub use meraki_api::{Device, Network, NetworkClient, Organization};
