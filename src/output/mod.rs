//! Profile renderers: WireGuard INI, AmneziaWG INI, V2Ray URI, JSON, terminal.

pub mod amnezia;
pub mod json;
pub mod terminal;
pub mod v2ray;
pub mod wireguard;

use crate::models::ConnectionProfile;

/// Trait for rendering a connection profile to an output format.
pub trait ProfileRenderer {
    /// Render the profile to a string.
    fn render(&self, profile: &ConnectionProfile) -> String;
}
