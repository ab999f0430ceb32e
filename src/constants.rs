//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! service URLs, and the fixed parts of the rendered profiles so a rename
//! or service move only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "warpgen";

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by build.rs).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (`.warpgen.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".warpgen.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "warpgen";


// ── Remote services ─────────────────────────────────────────────────

/// Key-material endpoint: plaintext body with `PrivateKey:` / `PublicKey:` lines.
pub const DEFAULT_KEY_URL: &str = "https://www.iranguard.workers.dev/keys";

/// Account-issuance endpoint (device registration POST).
pub const DEFAULT_REGISTER_URL: &str = "https://www.iranguard.workers.dev/wg";

/// Public list of candidate IPv4 endpoints.
pub const DEFAULT_ENDPOINT_LIST_URL: &str =
    "https://raw.githubusercontent.com/ircfspace/endpoint/refs/heads/main/ip.json";

/// Endpoint used whenever the list cannot be fetched or is empty.
pub const FALLBACK_ENDPOINT: &str = "engage.cloudflareclient.com:2408";

/// User-Agent the issuance service expects (mimics the official Android client).
pub const CLIENT_USER_AGENT: &str = "okhttp/3.12.1";

/// `CF-Client-Version` header the issuance service expects.
pub const CF_CLIENT_VERSION: &str = "a-6.10-2158";


// ── Fixed profile parameters ────────────────────────────────────────

/// DNS servers written into the WireGuard `[Interface]` section.
pub const WG_DNS: &str = "1.1.1.1, 1.0.0.1, 2606:4700:4700::1111, 2606:4700:4700::1001";

/// MTU for the WireGuard / AmneziaWG INI formats.
pub const WG_MTU: u16 = 1280;

/// MTU advertised in the V2Ray URI.
pub const V2RAY_MTU: u16 = 1420;


// ── Environment variable names ──────────────────────────────────────

pub const ENV_KEY_URL: &str = "WARPGEN_KEY_URL";
pub const ENV_API_URL: &str = "WARPGEN_API_URL";
pub const ENV_ENDPOINT_URL: &str = "WARPGEN_ENDPOINT_URL";
pub const ENV_ENDPOINT: &str = "WARPGEN_ENDPOINT";
