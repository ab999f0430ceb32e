//! JSON output renderer.
//!
//! Emits `{"profile": {...}, "configs": {...}}` with all three rendered
//! texts, for scripting against the tool.

use crate::models::ConnectionProfile;
use crate::output::amnezia::{AmneziaRenderer, ObfuscationParams};
use crate::output::v2ray::V2rayRenderer;
use crate::output::wireguard::WireguardRenderer;
use crate::output::ProfileRenderer;

/// JSON output renderer.
pub struct JsonRenderer {
    pub amnezia_params: ObfuscationParams,
}

impl ProfileRenderer for JsonRenderer {
    fn render(&self, profile: &ConnectionProfile) -> String {
        let output = serde_json::json!({
            "profile": profile,
            "configs": {
                "wireguard": WireguardRenderer.render(profile),
                "amnezia": AmneziaRenderer::new(self.amnezia_params.clone()).render(profile),
                "v2ray": V2rayRenderer.render(profile),
            },
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
