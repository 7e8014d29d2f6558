// ── Dashboard snapshot ──
//
// The JSON document `/api/meraki-data` returns. Field names are camelCase on
// the wire because the browser front end reads them directly.

use indexmap::IndexMap;
use serde::Serialize;

use meraki_api::{Device, NetworkClient};

/// Device counts per hardware model, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceTypeTally {
    counts: IndexMap<String, usize>,
}

impl DeviceTypeTally {
    /// Count `devices` by model; devices without one count as `"Unknown"`.
    pub fn from_devices(devices: &[Device]) -> Self {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for device in devices {
            *counts.entry(device.model_or_unknown().into_owned()).or_default() += 1;
        }
        Self { counts }
    }

    /// Split into parallel `(models, counts)` vectors.
    pub fn into_parallel(self) -> (Vec<String>, Vec<usize>) {
        self.counts.into_iter().unzip()
    }
}

/// Everything the dashboard page renders, for one organization/network pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub organization_name: String,
    pub network_name: String,
    pub device_count: usize,
    pub client_count: usize,
    /// Distinct device models, parallel to `device_type_counts`.
    pub device_types: Vec<String>,
    pub device_type_counts: Vec<usize>,
    pub devices: Vec<Device>,
    pub clients: Vec<NetworkClient>,
}

impl DashboardSnapshot {
    /// Derive counts and the model tally from the raw lists.
    pub fn new(
        organization_name: String,
        network_name: String,
        devices: Vec<Device>,
        clients: Vec<NetworkClient>,
    ) -> Self {
        let (device_types, device_type_counts) =
            DeviceTypeTally::from_devices(&devices).into_parallel();
        Self {
            organization_name,
            network_name,
            device_count: devices.len(),
            client_count: clients.len(),
            device_types,
            device_type_counts,
            devices,
            clients,
        }
    }
}
