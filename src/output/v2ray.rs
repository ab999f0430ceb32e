//! V2Ray-compatible `wireguard://` URI renderer.

use crate::constants::V2RAY_MTU;
use crate::models::ConnectionProfile;
use crate::output::ProfileRenderer;

/// Renders the single-line `wireguard://` URI understood by V2Ray-family
/// clients.
///
/// Keys and addresses are percent-encoded as URI components; the `reserved`
/// parameter is pre-encoded (decimal bytes joined with `%2C`) and inserted
/// verbatim.
pub struct V2rayRenderer;

impl ProfileRenderer for V2rayRenderer {
    fn render(&self, profile: &ConnectionProfile) -> String {
        format!(
            "wireguard://{private_key}@{endpoint}?address={v4},{v6}&reserved={reserved}&publickey={peer_key}&mtu={mtu}#V2ray-Config",
            private_key = encode_component(&profile.private_key),
            endpoint = profile.endpoint,
            v4 = encode_component(&format!("{}/32", profile.address_v4)),
            v6 = encode_component(&format!("{}/128", profile.address_v6)),
            reserved = profile.reserved_param(),
            peer_key = encode_component(&profile.peer_public_key),
            mtu = V2RAY_MTU,
        )
    }
}

/// Percent-encode a URI component.
///
/// Unreserved set matches JavaScript's `encodeURIComponent`:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. Everything else is emitted as
/// uppercase-hex `%XX` per UTF-8 byte.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ConnectionProfile {
        ConnectionProfile {
            private_key: "yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=".to_string(),
            peer_public_key: "bmXOC+F1FxEMF9dyiK2H5/1SUtzH0JuVo51h2wPfgyo=".to_string(),
            address_v4: "172.16.0.2".to_string(),
            address_v6: "2606:4700:110:8949::1".to_string(),
            client_id: "kIyA".to_string(),
            reserved: [144, 140, 128],
            endpoint: "162.159.192.1:2408".to_string(),
        }
    }

    #[test]
    fn encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_component("a+b/c="), "a%2Bb%2Fc%3D");
        assert_eq!(encode_component("2606:4700::1/128"), "2606%3A4700%3A%3A1%2F128");
        assert_eq!(encode_component("a b"), "a%20b");
    }

    #[test]
    fn renders_full_uri() {
        let uri = V2rayRenderer.render(&profile());
        assert_eq!(
            uri,
            "wireguard://yAnz5TF%2BlXXJte14tji3zlMNq%2Bhd2rYUIgJBgB3fBmk%3D@162.159.192.1:2408\
             ?address=172.16.0.2%2F32,2606%3A4700%3A110%3A8949%3A%3A1%2F128\
             &reserved=144%2C140%2C128\
             &publickey=bmXOC%2BF1FxEMF9dyiK2H5%2F1SUtzH0JuVo51h2wPfgyo%3D\
             &mtu=1420#V2ray-Config",
        );
    }

    #[test]
    fn reserved_parameter_is_not_double_encoded() {
        let uri = V2rayRenderer.render(&profile());
        assert!(uri.contains("&reserved=144%2C140%2C128&"));
        assert!(!uri.contains("%252C"));
    }
}
