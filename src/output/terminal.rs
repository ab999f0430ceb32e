//! Terminal renderer: all three formats with colored section headers.

use colored::Colorize;

use crate::models::ConnectionProfile;
use crate::output::amnezia::{AmneziaRenderer, ObfuscationParams};
use crate::output::v2ray::V2rayRenderer;
use crate::output::wireguard::WireguardRenderer;
use crate::output::ProfileRenderer;

/// Terminal output renderer: headed sections, copy-friendly bodies.
pub struct TerminalRenderer {
    pub amnezia_params: ObfuscationParams,
}

impl ProfileRenderer for TerminalRenderer {
    fn render(&self, profile: &ConnectionProfile) -> String {
        let mut output = String::new();

        section(&mut output, "WireGuard", &WireguardRenderer.render(profile));
        section(
            &mut output,
            "AmneziaWG",
            &AmneziaRenderer::new(self.amnezia_params.clone()).render(profile),
        );
        section(&mut output, "V2Ray", &V2rayRenderer.render(profile));

        output.push_str(&format!(
            "{}\n {} {}\n",
            "───────────────────────────────────".dimmed(),
            "endpoint:".dimmed(),
            profile.endpoint.bold(),
        ));

        output
    }
}

fn section(output: &mut String, title: &str, body: &str) {
    output.push_str(&format!(
        "{} {}\n\n",
        "──".dimmed(),
        title.bold().cyan(),
    ));
    output.push_str(body.trim_end());
    output.push_str("\n\n");
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
    fn renders_all_three_sections() {
        let renderer = TerminalRenderer {
            amnezia_params: ObfuscationParams::default(),
        };
        let output = renderer.render(&profile());

        assert!(output.contains("WireGuard"));
        assert!(output.contains("AmneziaWG"));
        assert!(output.contains("V2Ray"));
        assert!(output.contains("wireguard://"));
        assert!(output.contains("endpoint:"));
    }
}
