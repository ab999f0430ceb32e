//! Device identity fabrication.
//!
//! The issuance service expects an install identifier and an FCM push token.
//! Neither is verified server-side, so both are fabricated: the install id is
//! a random alphanumeric string and the "token" only mimics the FCM shape
//! (`<install_id>:APA91b<random>`). Fresh per run, single-use.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of the install identifier.
pub const INSTALL_ID_LEN: usize = 22;

/// Length of the random tail of the pseudo-FCM token.
const FCM_SUFFIX_LEN: usize = 134;

/// A fabricated device identity.
#[derive(Debug, Clone)]
pub struct Identity {
    pub install_id: String,
    pub fcm_token: String,
}

impl Identity {
    /// Fabricate a fresh identity.
    pub fn generate() -> Self {
        let install_id = random_string(INSTALL_ID_LEN);
        let fcm_token = format!("{install_id}:APA91b{}", random_string(FCM_SUFFIX_LEN));
        Self {
            install_id,
            fcm_token,
        }
    }
}

/// Random string over `[A-Za-z0-9]`.
fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_id_is_22_alphanumeric_chars() {
        let identity = Identity::generate();
        assert_eq!(identity.install_id.len(), INSTALL_ID_LEN);
        assert!(identity.install_id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn fcm_token_has_expected_shape() {
        let identity = Identity::generate();
        let (prefix, rest) = identity.fcm_token.split_once(':').unwrap();
        assert_eq!(prefix, identity.install_id);
        assert!(rest.starts_with("APA91b"));
        assert_eq!(rest.len(), "APA91b".len() + 134);
    }

    #[test]
    fn identities_are_unique_per_generation() {
        // 62^22 possibilities; a collision here means the RNG is broken.
        let a = Identity::generate();
        let b = Identity::generate();
        assert_ne!(a.install_id, b.install_id);
    }
}
