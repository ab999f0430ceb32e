//! AmneziaWG INI renderer.
//!
//! Same wire protocol as WireGuard plus junk-packet obfuscation parameters
//! in the `[Interface]` section. WARP relays only tolerate junk packets, not
//! mangled handshakes, so `S1`/`S2` default to 0 and `H1`–`H4` stay at their
//! identity values.

use serde::{Deserialize, Serialize};

use crate::constants::{WG_DNS, WG_MTU};
use crate::models::ConnectionProfile;
use crate::output::ProfileRenderer;

/// Obfuscation parameters for the AmneziaWG `[Interface]` section.
///
/// Overridable via the `[amnezia]` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObfuscationParams {
    /// Junk packet count sent before the handshake.
    pub jc: u32,
    /// Minimum junk packet size in bytes.
    pub jmin: u32,
    /// Maximum junk packet size in bytes.
    pub jmax: u32,
    /// Init-packet junk prefix size. Must stay 0 for WARP.
    pub s1: u32,
    /// Response-packet junk prefix size. Must stay 0 for WARP.
    pub s2: u32,
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub h4: u32,
}

impl Default for ObfuscationParams {
    fn default() -> Self {
        Self {
            jc: 4,
            jmin: 40,
            jmax: 70,
            s1: 0,
            s2: 0,
            h1: 1,
            h2: 2,
            h3: 3,
            h4: 4,
        }
    }
}

/// Renders the obfuscated WireGuard flavor consumed by AmneziaWG clients.
pub struct AmneziaRenderer {
    pub params: ObfuscationParams,
}

impl AmneziaRenderer {
    pub fn new(params: ObfuscationParams) -> Self {
        Self { params }
    }
}

impl ProfileRenderer for AmneziaRenderer {
    fn render(&self, profile: &ConnectionProfile) -> String {
        let p = &self.params;
        format!(
            "[Interface]\n\
             PrivateKey = {private_key}\n\
             Address = {v4}/32, {v6}/128\n\
             DNS = {dns}\n\
             MTU = {mtu}\n\
             Jc = {jc}\n\
             Jmin = {jmin}\n\
             Jmax = {jmax}\n\
             S1 = {s1}\n\
             S2 = {s2}\n\
             H1 = {h1}\n\
             H2 = {h2}\n\
             H3 = {h3}\n\
             H4 = {h4}\n\
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
            jc = p.jc,
            jmin = p.jmin,
            jmax = p.jmax,
            s1 = p.s1,
            s2 = p.s2,
            h1 = p.h1,
            h2 = p.h2,
            h3 = p.h3,
            h4 = p.h4,
            peer_key = profile.peer_public_key,
            endpoint = profile.endpoint,
        )
    }
}
