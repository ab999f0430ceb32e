//! Standard WireGuard INI renderer.

use crate::constants::{WG_DNS, WG_MTU};
use crate::models::ConnectionProfile;
use crate::output::ProfileRenderer;

/// Renders the `[Interface]`/`[Peer]` INI text understood by every
/// WireGuard client.
pub struct WireguardRenderer;

impl ProfileRenderer for WireguardRenderer {
    fn render(&self, profile: &ConnectionProfile) -> String {
        format!(
            "[Interface]\n\
             PrivateKey = {private_key}\n\
             Address = {v4}/32, {v6}/128\n\
             DNS = {dns}\n\
             MTU = {mtu}\n\
             \n\
             [Peer]\n\
             PublicKey = {peer_key}\n\
             AllowedIPs = 0.0.0.0/0, ::/0\n\
             Endpoint = {endpoint}\n",
            private_key = profile.private_key,
            v4 = profile.address_v4,
            v6 = profile.address_v6,
            dns = WG_DNS,
            mtu = WG_MTU,
            peer_key = profile.peer_public_key,
            endpoint = profile.endpoint,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ConnectionProfile {
        ConnectionProfile {
            private_key: "priv-key=".to_string(),
            peer_public_key: "peer-key=".to_string(),
            address_v4: "172.16.0.2".to_string(),
            address_v6: "2606:4700:110:8949::1".to_string(),
            client_id: "kIyA".to_string(),
            reserved: [144, 140, 128],
            endpoint: "162.159.192.1:2408".to_string(),
        }
    }

    #[test]
    fn renders_interface_and_peer_sections() {
        let text = WireguardRenderer.render(&profile());

        assert!(text.starts_with("[Interface]\n"));
        assert!(text.contains("PrivateKey = priv-key=\n"));
        assert!(text.contains("Address = 172.16.0.2/32, 2606:4700:110:8949::1/128\n"));
        assert!(text.contains("DNS = 1.1.1.1, 1.0.0.1, 2606:4700:4700::1111, 2606:4700:4700::1001\n"));
        assert!(text.contains("MTU = 1280\n"));
        assert!(text.contains("\n[Peer]\n"));
        assert!(text.contains("PublicKey = peer-key=\n"));
        assert!(text.contains("AllowedIPs = 0.0.0.0/0, ::/0\n"));
        assert!(text.ends_with("Endpoint = 162.159.192.1:2408\n"));
    }

    #[test]
    fn render_is_deterministic() {
        let p = profile();
        assert_eq!(WireguardRenderer.render(&p), WireguardRenderer.render(&p));
    }
}
