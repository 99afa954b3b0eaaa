//! Network identity of the running instance.

use std::fmt;
use std::sync::Arc;

/// Hostname reported in responses so callers can tell replicas apart.
///
/// Resolved once at startup; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity(Arc<str>);

impl InstanceIdentity {
    /// `HOSTNAME` (set by container runtimes), then `/etc/hostname`, then `unknown`.
    pub fn resolve() -> Self {
        Self::from_sources(
            std::env::var("HOSTNAME").ok(),
            std::fs::read_to_string("/etc/hostname").ok(),
        )
    }

    pub fn new(hostname: impl Into<String>) -> Self {
        Self(Arc::from(hostname.into()))
    }

    fn from_sources(env_hostname: Option<String>, file_hostname: Option<String>) -> Self {
        [env_hostname, file_hostname]
            .into_iter()
            .flatten()
            .map(|h| h.trim().to_string())
            .find(|h| !h.is_empty())
            .map(Self::new)
            .unwrap_or_else(|| Self::new("unknown"))
    }

    pub fn hostname(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
