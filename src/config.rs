//! Registry configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Missing or unparsable values fall back to defaults.

use std::str::FromStr;

/// What to do when a registration names an identifier that is already
/// mapped to a different handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Last write wins: the new handle replaces the old one.
    #[default]
    Replace,
    /// Refuse the registration with
    /// [`RegistryError::DuplicateDevice`](crate::error::RegistryError::DuplicateDevice).
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown duplicate policy: {other}")),
        }
    }
}

/// Top-level registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial capacity of the identifier map.
    pub initial_capacity: usize,

    /// Handling of duplicate identifiers.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            duplicate_policy: DuplicatePolicy::Replace,
        }
    }
}

const DEFAULT_CAPACITY: usize = 64;

impl RegistryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file,
    /// then reads `DEVICE_REGISTRY_CAPACITY` and
    /// `DEVICE_REGISTRY_DUPLICATE_POLICY`.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_capacity = parse_var(&lookup, "DEVICE_REGISTRY_CAPACITY", DEFAULT_CAPACITY);
        let duplicate_policy = parse_var(
            &lookup,
            "DEVICE_REGISTRY_DUPLICATE_POLICY",
            DuplicatePolicy::Replace,
        );
        Self {
            initial_capacity,
            duplicate_policy,
        }
    }
}

/// Parses a variable as `T`, returning `default` on missing or invalid
/// values.
fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
