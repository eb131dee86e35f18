//! Handshake data types.

use std::fmt;

/// Seconds since the Unix epoch as reported by a server
///
/// Signed: a peer may announce any integer, including values before the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new timestamp
    pub fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Seconds since the Unix epoch
    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Absolute difference in seconds; either side may lead
    pub fn abs_diff(&self, other: Timestamp) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// Shift by a signed number of seconds, saturating at the i64 bounds
    pub fn offset(&self, secs: i64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle for a connected server session
///
/// Only used to attribute notices and to direct termination; never stored by
/// the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(u64);

impl PeerId {
    /// Create a new peer handle
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw session number
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Inclusive range of protocol revisions a server speaks
///
/// Signed: whatever integer a peer announces is compared as-is, so a negative
/// revision fails the overlap check instead of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    /// Oldest revision still accepted
    pub min: i64,
    /// Newest revision spoken
    pub current: i64,
}

impl VersionRange {
    /// Create a new range
    pub fn new(min: i64, current: i64) -> Self {
        Self { min, current }
    }

    /// True when at least one revision lies in both ranges
    pub fn overlaps(&self, other: &VersionRange) -> bool {
        !(self.current < other.min || other.current < self.min)
    }
}

/// Clock-skew thresholds in seconds
///
/// Both comparisons are strict: a delta equal to a threshold does not cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkewPolicy {
    /// Above this the link is accepted with an operator warning
    pub warn_secs: u64,
    /// Above this the link is dropped
    pub max_secs: u64,
}

/// Outcome of applying a [`SkewPolicy`] to a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewClass {
    /// `delta <= warn`
    Tolerable,
    /// `warn < delta <= max`
    Notable,
    /// `delta > max`
    Excessive,
}

impl SkewPolicy {
    /// Create a new policy
    pub fn new(warn_secs: u64, max_secs: u64) -> Self {
        Self {
            warn_secs,
            max_secs,
        }
    }

    /// Classify an absolute clock delta
    pub fn classify(&self, delta: u64) -> SkewClass {
        if delta > self.max_secs {
            SkewClass::Excessive
        } else if delta > self.warn_secs {
            SkewClass::Notable
        } else {
            SkewClass::Tolerable
        }
    }
}

/// What this server brings to every handshake evaluation
///
/// The local clock is not part of this value: it is read from a
/// [`ClockSource`](crate::ports::ClockSource) at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalNodeState {
    /// Revisions this server speaks
    pub versions: VersionRange,
    /// Skew thresholds
    pub skew_policy: SkewPolicy,
}

impl LocalNodeState {
    /// Create new local state
    pub fn new(versions: VersionRange, skew_policy: SkewPolicy) -> Self {
        Self {
            versions,
            skew_policy,
        }
    }
}

/// What a peer announces during the handshake
///
/// The wire message also carries a reserved integer. It is checked for syntax
/// by the parser and otherwise dropped, so it has no field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeAnnouncement {
    /// Peer's newest revision
    pub peer_current_version: i64,
    /// Peer's oldest accepted revision
    pub peer_min_version: i64,
    /// Peer's idea of the current time
    pub peer_time: Timestamp,
}

impl HandshakeAnnouncement {
    /// Create a new announcement
    pub fn new(peer_current_version: i64, peer_min_version: i64, peer_time: Timestamp) -> Self {
        Self {
            peer_current_version,
            peer_min_version,
            peer_time,
        }
    }

    /// The announcement this server sends to its own peers
    pub fn local(versions: VersionRange, now: Timestamp) -> Self {
        Self::new(versions.current, versions.min, now)
    }

    /// Revision range claimed by the peer
    pub fn peer_versions(&self) -> VersionRange {
        VersionRange::new(self.peer_min_version, self.peer_current_version)
    }
}
