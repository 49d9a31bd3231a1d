//! Host Environment - declared peer versions

use std::collections::BTreeMap;

/// Versions of peer components the host application provides
///
/// Versions are stored as declared; parsing happens when a requirement is
/// evaluated so that a malformed declaration is reported, not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    peers: BTreeMap<String, String>,
}

impl HostEnvironment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`declare`](Self::declare)
    pub fn with(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.declare(name, version);
        self
    }

    /// Declare (or redeclare) the version of a peer
    pub fn declare(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.peers.insert(name.into(), version.into());
    }

    /// Remove a declared peer, returning its version
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.peers.remove(name)
    }

    /// Declared version of a peer
    pub fn version(&self, name: &str) -> Option<&str> {
        self.peers.get(name).map(String::as_str)
    }

    /// Iterate declared peers in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.peers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Check if nothing is declared
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Forget every declaration
    pub fn clear(&mut self) {
        self.peers.clear();
    }
}
