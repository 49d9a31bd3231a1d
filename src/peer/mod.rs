//! Peer Dependencies
//!
//! Components call [`check_peer_dependencies`] at the top of every render.
//! The host declares what it provides with [`declare_host_peer`]; the set of
//! requirements comes from the installed [`PeerGuard`] (see
//! [`install_guard`] and `WidgetConfig::install`).

mod guard;
mod host;

use std::sync::{LazyLock, PoisonError, RwLock};

pub use guard::*;
pub use host::*;

static HOST: LazyLock<RwLock<HostEnvironment>> = LazyLock::new(Default::default);
static GUARD: LazyLock<RwLock<PeerGuard>> = LazyLock::new(Default::default);

/// Declare a peer version in the process-wide host environment
pub fn declare_host_peer(name: impl Into<String>, version: impl Into<String>) {
    let (name, version) = (name.into(), version.into());
    tracing::debug!(peer = %name, version = %version, "Host peer declared");
    HOST.write()
        .unwrap_or_else(PoisonError::into_inner)
        .declare(name, version);
}

/// Snapshot of the process-wide host environment
pub fn host_environment() -> HostEnvironment {
    HOST.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Replace the process-wide guard
pub fn install_guard(guard: PeerGuard) {
    tracing::debug!(requirements = guard.requirements().len(), "Peer guard installed");
    *GUARD.write().unwrap_or_else(PoisonError::into_inner) = guard;
}

/// Check the host against the installed requirements, warning on mismatch
///
/// Safe to call on every render; it never fails and never blocks on anything
/// but the two process-wide locks.
pub fn check_peer_dependencies() {
    let host = HOST.read().unwrap_or_else(PoisonError::into_inner);
    let guard = GUARD.read().unwrap_or_else(PoisonError::into_inner);
    guard.check(&host);
}

/// Warnings logged by the installed guard
pub fn warnings_emitted() -> u64 {
    GUARD
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .warnings_emitted()
}

/// Forget host declarations and restore the default guard
pub fn reset_for_testing() {
    HOST.write().unwrap_or_else(PoisonError::into_inner).clear();
    *GUARD.write().unwrap_or_else(PoisonError::into_inner) = PeerGuard::default();
}
