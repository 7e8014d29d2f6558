// ── Data source seam ──
//
// The four list operations the aggregator needs, each already reduced to a
// `FetchOutcome`. `MerakiClient` is the production implementation; tests
// plug in fakes.

use std::future::Future;

use tracing::warn;

use meraki_api::{Device, MerakiClient, Network, NetworkClient, Organization};

use crate::outcome::FetchOutcome;

/// Upstream lists the dashboard is built from.
///
/// Implementations must not return errors: failures are logged and reported
/// as [`FetchOutcome::Unavailable`].
pub trait DashboardSource {
    fn fetch_organizations(&self) -> impl Future<Output = FetchOutcome<Organization>> + Send;

    fn fetch_networks(
        &self,
        organization_id: &str,
    ) -> impl Future<Output = FetchOutcome<Network>> + Send;

    fn fetch_devices(&self, network_id: &str) -> impl Future<Output = FetchOutcome<Device>> + Send;

    fn fetch_clients(
        &self,
        network_id: &str,
        timespan_secs: u64,
    ) -> impl Future<Output = FetchOutcome<NetworkClient>> + Send;
}

impl DashboardSource for MerakiClient {
    async fn fetch_organizations(&self) -> FetchOutcome<Organization> {
        let result = self.list_organizations().await;
        if let Err(ref e) = result {
            warn!(
                operation = "fetch_organizations",
                status = ?e.status(),
                transient = e.is_transient(),
                error = %e,
                "error fetching organizations"
            );
        }
        FetchOutcome::from_result(result)
    }

    async fn fetch_networks(&self, organization_id: &str) -> FetchOutcome<Network> {
        let result = self.list_networks(organization_id).await;
        if let Err(ref e) = result {
            warn!(
                operation = "fetch_networks",
                organization_id,
                status = ?e.status(),
                transient = e.is_transient(),
                error = %e,
                "error fetching networks for organization"
            );
        }
        FetchOutcome::from_result(result)
    }

    async fn fetch_devices(&self, network_id: &str) -> FetchOutcome<Device> {
        let result = self.list_devices(network_id).await;
        if let Err(ref e) = result {
            warn!(
                operation = "fetch_devices",
                network_id,
                status = ?e.status(),
                transient = e.is_transient(),
                error = %e,
                "error fetching devices for network"
            );
        }
        FetchOutcome::from_result(result)
    }

    async fn fetch_clients(&self, network_id: &str, timespan_secs: u64) -> FetchOutcome<NetworkClient> {
        let result = self.list_clients(network_id, timespan_secs).await;
        if let Err(ref e) = result {
            warn!(
                operation = "fetch_clients",
                network_id,
                timespan_secs,
                status = ?e.status(),
                transient = e.is_transient(),
                error = %e,
                "error fetching clients for network"
            );
        }
        FetchOutcome::from_result(result)
    }
}
