//! Key-material parsing.
//!
//! The key service returns a plaintext body containing labeled lines:
//!
//! ```text
//! PrivateKey: yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=
//! PublicKey: HIgo9xNzJMWLKASShiTqIybxZ0U3wGLiUeJ1PKf8ykw=
//! ```
//!
//! Both lines must be present; a partial keypair is an error.

use regex::Regex;

use crate::api::ApiError;

/// An ephemeral keypair fetched from the key service. Never persisted.
#[derive(Debug, Clone)]
pub struct Keypair {
    pub public_key: String,
    pub private_key: String,
}

/// Parse the key service response body into a keypair.
pub fn parse_key_material(body: &str) -> Result<Keypair, ApiError> {
    let public_key = extract_key(body, "PublicKey").ok_or(ApiError::MissingKey("PublicKey"))?;
    let private_key = extract_key(body, "PrivateKey").ok_or(ApiError::MissingKey("PrivateKey"))?;
    Ok(Keypair {
        public_key,
        private_key,
    })
}

/// Extract the value of a `<name>: <value>` line, trimmed.
fn extract_key(body: &str, name: &str) -> Option<String> {
    // The label set is fixed, so the pattern is always valid.
    let re = Regex::new(&format!(r"{name}:\s(.+)")).ok()?;
    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
PrivateKey: yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=
PublicKey: HIgo9xNzJMWLKASShiTqIybxZ0U3wGLiUeJ1PKf8ykw=
";

    #[test]
    fn parses_both_keys() {
        let keypair = parse_key_material(BODY).unwrap();
        assert_eq!(
            keypair.private_key,
            "yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=",
        );
        assert_eq!(
            keypair.public_key,
            "HIgo9xNzJMWLKASShiTqIybxZ0U3wGLiUeJ1PKf8ykw=",
        );
    }

    #[test]
    fn trims_trailing_whitespace() {
        let keypair = parse_key_material("PublicKey: abc  \nPrivateKey: def\r\n").unwrap();
        assert_eq!(keypair.public_key, "abc");
        assert_eq!(keypair.private_key, "def");
    }

    #[test]
    fn missing_private_key_is_an_error() {
        let err = parse_key_material("PublicKey: abc\n").unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("PrivateKey")));
    }

    #[test]
    fn missing_public_key_is_an_error() {
        let err = parse_key_material("PrivateKey: def\n").unwrap_err();
        assert!(matches!(err, ApiError::MissingKey("PublicKey")));
    }

    #[test]
    fn surrounding_noise_is_ignored() {
        let body = "# generated\nPrivateKey: def\nsomething else\nPublicKey: abc\n";
        let keypair = parse_key_material(body).unwrap();
        assert_eq!(keypair.public_key, "abc");
        assert_eq!(keypair.private_key, "def");
    }
}
