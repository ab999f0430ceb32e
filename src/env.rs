//! Environment variable lookups, indirected for tests.
//!
//! The config loader reads `WARPGEN_*` overrides through an [`Env`] value:
//! [`Env::real()`] delegates to [`std::env::var`], while [`Env::mock()`]
//! serves a fixed map so tests never have to touch the process environment
//! with `unsafe` `set_var` / `remove_var` calls.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// An `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// An `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
