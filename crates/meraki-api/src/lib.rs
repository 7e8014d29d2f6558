// meraki-api: Async Rust client for the Cisco Meraki Dashboard API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, MerakiClient};
pub use error::Error;
pub use models::{Device, Network, NetworkClient, Organization};
pub use transport::TransportConfig;
