// ── Snapshot assembly ──
//
// organizations → first org → networks → first network → devices + clients.
// Each step needs an id from the previous one, so the calls run in order.

use tracing::{debug, info};

use crate::error::DashboardError;
use crate::snapshot::DashboardSnapshot;
use crate::source::DashboardSource;

/// Client history window requested from the API: the last 24 hours.
pub const DEFAULT_CLIENT_TIMESPAN_SECS: u64 = 86_400;

/// Build a [`DashboardSnapshot`] for the first network of the first
/// organization `source` returns.
///
/// Fails only when no organization or no network can be resolved. Device
/// and client failures produce empty lists and zero counts.
pub async fn build_snapshot<S>(
    source: &S,
    client_timespan_secs: u64,
) -> Result<DashboardSnapshot, DashboardError>
where
    S: DashboardSource + Sync,
{
    let organizations = source.fetch_organizations().await;
    let Some(organization) = organizations.first() else {
        return Err(if organizations.is_unavailable() {
            DashboardError::OrganizationsUnavailable
        } else {
            DashboardError::NoOrganizations
        });
    };
    debug!(organization_id = %organization.id, organization = %organization.name, "selected organization");

    let networks = source.fetch_networks(&organization.id).await;
    let Some(network) = networks.first() else {
        return Err(DashboardError::NoNetworks {
            organization_name: organization.name.clone(),
        });
    };
    debug!(network_id = %network.id, network = %network.name, "selected network");

    let devices = source.fetch_devices(&network.id).await.into_items();
    for device in &devices {
        debug!(
            name = %device.display_name(),
            status = %device.display_status(),
            model = %device.model_or_unknown(),
            "device"
        );
    }
    let clients = source
        .fetch_clients(&network.id, client_timespan_secs)
        .await
        .into_items();

    let snapshot = DashboardSnapshot::new(
        organization.name.clone(),
        network.name.clone(),
        devices,
        clients,
    );
    info!(
        organization = %snapshot.organization_name,
        network = %snapshot.network_name,
        devices = snapshot.device_count,
        clients = snapshot.client_count,
        "dashboard snapshot assembled"
    );
    Ok(snapshot)
}
