//! Peer Guard - version requirement checks
//!
//! Evaluates each [`PeerRequirement`] against a [`HostEnvironment`] and logs a
//! warning for every unmet one. Checking never fails and never panics.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use semver::{Comparator, Op, Prerelease, Version, VersionReq};
use snafu::ResultExt;

use super::host::HostEnvironment;
use crate::error::{InvalidRequirementSnafu, Result};

/// Peer that hosts are expected to declare by default
pub const DEFAULT_PEER_NAME: &str = "html-host";

/// A peer the host must provide, with its accepted versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRequirement {
    pub name: String,
    pub requirement: VersionReq,
}

impl PeerRequirement {
    /// Create a requirement from an already parsed range
    pub fn new(name: impl Into<String>, requirement: VersionReq) -> Self {
        Self {
            name: name.into(),
            requirement,
        }
    }

    /// Parse a requirement such as `">=1.0.0"` or `"^2"`
    pub fn parse(name: impl Into<String>, requirement: &str) -> Result<Self> {
        let name = name.into();
        let parsed = VersionReq::parse(requirement).context(InvalidRequirementSnafu {
            name: name.clone(),
            requirement,
        })?;
        Ok(Self::new(name, parsed))
    }
}

impl Default for PeerRequirement {
    /// `html-host >=1.0.0`
    fn default() -> Self {
        Self::new(
            DEFAULT_PEER_NAME,
            VersionReq {
                comparators: vec![Comparator {
                    op: Op::GreaterEq,
                    major: 1,
                    minor: Some(0),
                    patch: Some(0),
                    pre: Prerelease::EMPTY,
                }],
            },
        )
    }
}

impl fmt::Display for PeerRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.requirement)
    }
}

/// Outcome of evaluating one requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerStatus {
    /// Declared and within range
    Satisfied { name: String, version: Version },
    /// Not declared by the host
    Missing { name: String, requirement: VersionReq },
    /// Declared but outside the accepted range
    Unsupported {
        name: String,
        found: Version,
        requirement: VersionReq,
    },
    /// Declared with a version string that is not semver
    Unparseable {
        name: String,
        raw: String,
        requirement: VersionReq,
    },
}

impl PeerStatus {
    /// Check if the requirement is met
    pub fn is_satisfied(&self) -> bool {
        matches!(self, PeerStatus::Satisfied { .. })
    }

    /// Peer name this status refers to
    pub fn name(&self) -> &str {
        match self {
            PeerStatus::Satisfied { name, .. }
            | PeerStatus::Missing { name, .. }
            | PeerStatus::Unsupported { name, .. }
            | PeerStatus::Unparseable { name, .. } => name,
        }
    }
}

/// Parse a declared version, accepting a leading `v` and missing minor/patch parts
pub fn parse_declared_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    // "18" or "18.2"
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.is_empty() || parts.len() > 2 {
        return None;
    }
    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part.parse().ok()?;
    }
    Some(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// Evaluate a single requirement against the host
pub fn evaluate(env: &HostEnvironment, req: &PeerRequirement) -> PeerStatus {
    let Some(raw) = env.version(&req.name) else {
        return PeerStatus::Missing {
            name: req.name.clone(),
            requirement: req.requirement.clone(),
        };
    };

    let Some(version) = parse_declared_version(raw) else {
        return PeerStatus::Unparseable {
            name: req.name.clone(),
            raw: raw.to_string(),
            requirement: req.requirement.clone(),
        };
    };

    if req.requirement.matches(&version) {
        PeerStatus::Satisfied {
            name: req.name.clone(),
            version,
        }
    } else {
        PeerStatus::Unsupported {
            name: req.name.clone(),
            found: version,
            requirement: req.requirement.clone(),
        }
    }
}

/// Checks a set of requirements and reports unmet ones through `tracing`
///
/// By default every check re-warns. With `warn_once` only the first failing
/// check logs until [`reset`](Self::reset) is called.
#[derive(Debug)]
pub struct PeerGuard {
    requirements: Vec<PeerRequirement>,
    warn_once: bool,
    warned: AtomicBool,
    warnings: AtomicU64,
}

impl PeerGuard {
    /// Create a guard for the given requirements
    pub fn new(requirements: Vec<PeerRequirement>) -> Self {
        Self {
            requirements,
            warn_once: false,
            warned: AtomicBool::new(false),
            warnings: AtomicU64::new(0),
        }
    }

    /// Suppress repeated warnings after the first failing check
    pub fn warn_once(mut self, warn_once: bool) -> Self {
        self.warn_once = warn_once;
        self
    }

    /// Requirements being checked
    pub fn requirements(&self) -> &[PeerRequirement] {
        &self.requirements
    }

    /// Number of warnings logged so far
    pub fn warnings_emitted(&self) -> u64 {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Clear the warned flag and the warning counter
    pub fn reset(&self) {
        self.warned.store(false, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
    }

    /// Evaluate every requirement, warning about unmet ones
    pub fn check(&self, env: &HostEnvironment) -> Vec<PeerStatus> {
        let statuses: Vec<PeerStatus> = self
            .requirements
            .iter()
            .map(|req| evaluate(env, req))
            .collect();

        if statuses.iter().all(PeerStatus::is_satisfied) {
            return statuses;
        }
        if self.warn_once && self.warned.swap(true, Ordering::Relaxed) {
            return statuses;
        }

        for status in &statuses {
            match status {
                PeerStatus::Satisfied { .. } => continue,
                PeerStatus::Missing { name, requirement } => {
                    tracing::warn!(
                        peer = %name,
                        required = %requirement,
                        "Peer dependency {name} is not provided by the host (requires {requirement})"
                    );
                }
                PeerStatus::Unsupported {
                    name,
                    found,
                    requirement,
                } => {
                    tracing::warn!(
                        peer = %name,
                        required = %requirement,
                        found = %found,
                        "Peer dependency {name} {found} is not supported (requires {requirement})"
                    );
                }
                PeerStatus::Unparseable {
                    name,
                    raw,
                    requirement,
                } => {
                    tracing::warn!(
                        peer = %name,
                        required = %requirement,
                        found = %raw,
                        "Peer dependency {name} declares unrecognized version {raw:?} (requires {requirement})"
                    );
                }
            }
            self.warnings.fetch_add(1, Ordering::Relaxed);
        }

        statuses
    }
}

impl Default for PeerGuard {
    fn default() -> Self {
        Self::new(vec![PeerRequirement::default()])
    }
}
