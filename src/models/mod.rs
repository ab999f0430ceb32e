//! Data types flowing through the pipeline: wire payloads and the
//! assembled connection profile.

pub mod account;
pub mod profile;

pub use account::{AccountData, Addresses, InterfaceConfig, Peer, WarpConfig};
pub use profile::{ConnectionProfile, ProfileError};
