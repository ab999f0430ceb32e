//! Account payload returned by the issuance service.
//!
//! Only the fields the formatters need are modelled; everything else in the
//! response is pass-through data the tool has no opinion about, and serde
//! ignores it. No field is validated beyond presence.

use serde::{Deserialize, Serialize};

/// Top-level registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub config: WarpConfig,
}

/// The `config` object of the registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarpConfig {
    /// Base64 client identifier; its first three decoded bytes become the
    /// V2Ray `reserved` parameter.
    pub client_id: String,
    pub interface: InterfaceConfig,
    /// Peers the account may connect through. The first entry is used.
    #[serde(default)]
    pub peers: Vec<Peer>,
}

/// Interface block: the tunnel addresses assigned to this account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceConfig {
    pub addresses: Addresses,
}

/// Assigned tunnel addresses (bare IPs, no prefix length).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Addresses {
    pub v4: String,
    pub v6: String,
}

/// A peer entry; only the public key matters to the formatters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Peer {
    pub public_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_payload() {
        let json = r#"{
            "id": "t.1234",
            "type": "a",
            "config": {
                "client_id": "kIyA",
                "interface": {
                    "addresses": { "v4": "172.16.0.2", "v6": "2606:4700:110:8949::1" }
                },
                "peers": [
                    { "public_key": "bmXOC+F1FxEMF9dyiK2H5/1SUtzH0JuVo51h2wPfgyo=", "endpoint": { "host": "engage.cloudflareclient.com:2408" } }
                ]
            }
        }"#;

        let account: AccountData = serde_json::from_str(json).unwrap();
        assert_eq!(account.config.client_id, "kIyA");
        assert_eq!(account.config.interface.addresses.v4, "172.16.0.2");
        assert_eq!(
            account.config.peers[0].public_key,
            "bmXOC+F1FxEMF9dyiK2H5/1SUtzH0JuVo51h2wPfgyo=",
        );
    }

    #[test]
    fn missing_peers_defaults_to_empty() {
        let json = r#"{
            "config": {
                "client_id": "kIyA",
                "interface": { "addresses": { "v4": "172.16.0.2", "v6": "::1" } }
            }
        }"#;

        let account: AccountData = serde_json::from_str(json).unwrap();
        assert!(account.config.peers.is_empty());
    }
}
