// Dashboard API response types
//
// Organizations and networks are typed; only their id and name are read.
// Devices and clients stay raw JSON so they reach the browser unchanged.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Organization ─────────────────────────────────────────────────────

/// Entry from `GET /organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

// ── Network ──────────────────────────────────────────────────────────

/// Entry from `GET /organizations/{organizationId}/networks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    pub name: String,
}

// ── Device ───────────────────────────────────────────────────────────

/// Placeholder shown for a device without a name or status.
pub const NOT_AVAILABLE: &str = "N/A";

/// Model bucket for devices that don't report one.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Entry from `GET /networks/{networkId}/devices`, kept as the raw record.
///
/// The API returns a few dozen fields per device (serial, mac, lanIp,
/// firmware, ...) and is loose about their types, so nothing is parsed up
/// front: the record is re-serialized exactly as received, and the handful
/// of fields the dashboard reads are looked up on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Device(pub Value);

impl Device {
    /// Device name, or `"N/A"`.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.text("name", NOT_AVAILABLE)
    }

    /// Device status, or `"N/A"`.
    pub fn display_status(&self) -> Cow<'_, str> {
        self.text("status", NOT_AVAILABLE)
    }

    /// Hardware model, or `"Unknown"`.
    ///
    /// A non-string model is bucketed by its JSON text (`42` → `"42"`).
    pub fn model_or_unknown(&self) -> Cow<'_, str> {
        self.text("model", UNKNOWN_MODEL)
    }

    /// String form of `key`; missing, `null`, or a non-object record gives
    /// `default`.
    fn text(&self, key: &str, default: &'static str) -> Cow<'_, str> {
        match self.0.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(default),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

impl From<Value> for Device {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Entry from `GET /networks/{networkId}/clients`.
///
/// Never inspected; only counted and passed through.
pub type NetworkClient = Value;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn device_defaults_when_fields_missing() {
        let device: Device = serde_json::from_value(json!({ "serial": "Q2XX-AAAA-BBBB" })).unwrap();
        assert_eq!(device.display_name(), "N/A");
        assert_eq!(device.display_status(), "N/A");
        assert_eq!(device.model_or_unknown(), "Unknown");
    }

    #[test]
    fn device_keeps_unmodelled_fields() {
        let raw = json!({
            "name": "Lobby AP",
            "model": "MR33",
            "serial": "Q2XX-AAAA-BBBB",
            "lanIp": "10.0.0.5",
            "tags": ["lobby"],
        });
        let device: Device = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(device.display_name(), "Lobby AP");
        assert_eq!(serde_json::to_value(&device).unwrap(), raw);
    }

    #[test]
    fn device_null_fields_survive_round_trip() {
        let raw = json!({ "model": "MR33", "name": null, "status": null, "serial": "Q2" });
        let device: Device = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(device.display_name(), "N/A");
        assert_eq!(device.display_status(), "N/A");
        assert_eq!(serde_json::to_value(&device).unwrap(), raw);

        let text = r#"{"model":"MR33","name":null,"serial":"Q2"}"#;
        let device: Device = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&device).unwrap(), text);
    }

    #[test]
    fn device_non_string_fields_do_not_fail_the_list() {
        let devices: Vec<Device> = serde_json::from_value(json!([
            { "model": 42, "name": ["a"] },
            { "model": "MR33" },
            { "model": null },
            "not-an-object",
        ]))
        .unwrap();

        assert_eq!(devices.len(), 4);
        assert_eq!(devices[0].model_or_unknown(), "42");
        assert_eq!(devices[0].display_name(), r#"["a"]"#);
        assert_eq!(devices[1].model_or_unknown(), "MR33");
        assert_eq!(devices[2].model_or_unknown(), "Unknown");
        assert_eq!(devices[3].model_or_unknown(), "Unknown");
    }
}
