// Hand-crafted async HTTP client for the Meraki Dashboard API (v1).
//
// Base path: https://api.meraki.com/api/v1/
// Auth: X-Cisco-Meraki-API-Key header

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{Device, Network, NetworkClient, Organization};
use crate::transport::TransportConfig;

/// Public Dashboard API root.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

// Sent as `X-Cisco-Meraki-API-Key`; header names are case-insensitive.
const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

// ── Error response shape from the Dashboard API ──────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Meraki Dashboard API.
///
/// Every request carries the API key and a JSON content type as default
/// headers. One attempt per call: no retries, no pagination.
#[derive(Debug, Clone)]
pub struct MerakiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MerakiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `X-Cisco-Meraki-API-Key` (marked sensitive so it never shows
    /// up in debug output) and `Content-Type: application/json`.
    pub fn new(
        base_url: &str,
        api_key: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|e| Error::InvalidApiKeyHeader(e.to_string()))?;
        key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = transport.build_client_with_headers(headers)?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { http, base_url })
    }

    /// The API root every path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL.
    ///
    /// Identifiers are pushed as whole segments, so they get percent-encoded
    /// rather than being able to change the path.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Infallible: the constructor rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidApiKey;
        }

        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .filter(|err| !err.errors.is_empty())
            .map_or_else(|| status.to_string(), |err| err.errors.join("; "));

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// List the organizations the API key has access to.
    ///
    /// `GET /organizations`
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get(&["organizations"]).await
    }

    /// List the networks in an organization.
    ///
    /// `GET /organizations/{organizationId}/networks`
    pub async fn list_networks(&self, organization_id: &str) -> Result<Vec<Network>, Error> {
        self.get(&["organizations", organization_id, "networks"])
            .await
    }

    /// List the devices in a network.
    ///
    /// `GET /networks/{networkId}/devices`
    pub async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>, Error> {
        self.get(&["networks", network_id, "devices"]).await
    }

    /// List the clients seen on a network within the last `timespan_secs`.
    ///
    /// `GET /networks/{networkId}/clients?timespan={timespan_secs}`
    pub async fn list_clients(
        &self,
        network_id: &str,
        timespan_secs: u64,
    ) -> Result<Vec<NetworkClient>, Error> {
        self.get_with_params(
            &["networks", network_id, "clients"],
            &[("timespan", timespan_secs.to_string())],
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> MerakiClient {
        MerakiClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn url_appends_to_versioned_base() {
        let c = client(DEFAULT_BASE_URL);
        assert_eq!(
            c.url(&["organizations"]).as_str(),
            "https://api.meraki.com/api/v1/organizations"
        );
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let c = client("https://api.meraki.com/api/v1/");
        assert_eq!(
            c.url(&["networks", "N_123", "devices"]).as_str(),
            "https://api.meraki.com/api/v1/networks/N_123/devices"
        );
    }

    #[test]
    fn url_encodes_identifiers() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.url(&["networks", "a/b", "clients"]).path(),
            "/networks/a%2Fb/clients"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let err = MerakiClient::from_reqwest("mailto:ops@example.com", reqwest::Client::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
