// Shared request state: built once at startup, read-only afterwards.

use std::sync::Arc;

use meraki_api::MerakiClient;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<MerakiClient>,
    /// Client history window passed to every clients fetch.
    pub client_timespan_secs: u64,
}

impl AppState {
    pub fn new(client: MerakiClient, client_timespan_secs: u64) -> Self {
        Self {
            client: Arc::new(client),
            client_timespan_secs,
        }
    }
}
