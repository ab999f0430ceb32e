//! Endpoint selection.
//!
//! The candidate list is a public JSON document of `host:port` strings. One
//! entry is picked uniformly at random. Any failure along the way — network,
//! HTTP status, parse, empty list — falls back to a fixed default endpoint
//! and never fails the run.

use rand::Rng;
use serde::Deserialize;

use crate::api::WarpApi;
use crate::constants::FALLBACK_ENDPOINT;

/// The endpoint list document: `{ "ipv4": ["host:port", ...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointList {
    #[serde(default)]
    pub ipv4: Vec<String>,
}

/// Pick one endpoint uniformly at random, or `None` if the list is empty.
pub fn pick_random(list: &EndpointList) -> Option<String> {
    if list.ipv4.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..list.ipv4.len());
    Some(list.ipv4[index].clone())
}

/// Select an endpoint for a new profile.
///
/// Fetches the candidate list and picks one at random; on any failure the
/// fallback constant is returned with a warning on stderr.
pub async fn select(api: &dyn WarpApi, quiet: bool) -> String {
    match api.fetch_endpoints().await {
        Ok(list) => match pick_random(&list) {
            Some(endpoint) => endpoint,
            None => {
                if !quiet {
                    eprintln!("Warning: endpoint list is empty, using fallback {FALLBACK_ENDPOINT}");
                }
                FALLBACK_ENDPOINT.to_string()
            }
        },
        Err(e) => {
            if !quiet {
                eprintln!("Warning: could not fetch endpoint list ({e}), using fallback {FALLBACK_ENDPOINT}");
            }
            FALLBACK_ENDPOINT.to_string()
        }
    }
}
