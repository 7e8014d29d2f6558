// ── Dashboard errors ──
//
// The only two conditions that abort a snapshot. Device and client
// failures degrade to empty lists instead of landing here.

use thiserror::Error;

/// Why a snapshot could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// The organizations call failed outright.
    #[error("Could not fetch organizations. Check API key and network connectivity.")]
    OrganizationsUnavailable,

    /// The organizations call succeeded but returned nothing.
    #[error("No Meraki organizations found. Check API key and network connectivity.")]
    NoOrganizations,

    /// The selected organization has no reachable networks.
    #[error("No networks found for organization {organization_name}.")]
    NoNetworks { organization_name: String },
}

impl DashboardError {
    /// HTTP status the endpoint answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::OrganizationsUnavailable | Self::NoOrganizations => 500,
            Self::NoNetworks { .. } => 404,
        }
    }
}
