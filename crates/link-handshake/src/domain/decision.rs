//! Evaluation outcomes.

use std::fmt;

use super::types::Timestamp;

/// Result of evaluating one handshake announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Link is viable; may carry a skew advisory for operators
    Accepted { warning: Option<SkewWarning> },
    /// Link must be torn down
    Rejected(RejectReason),
}

impl Decision {
    /// Accepted without advisory
    pub fn accepted() -> Self {
        Self::Accepted { warning: None }
    }

    /// True for both silent and advisory acceptance
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Skew advisory attached to an accepted link
    pub fn warning(&self) -> Option<&SkewWarning> {
        match self {
            Self::Accepted { warning } => warning.as_ref(),
            Self::Rejected(_) => None,
        }
    }

    /// Rejection reason, if any
    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// Why a link was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No protocol revision in common
    IncompatibleVersion(VersionMismatch),
    /// Clocks too far apart to trust timestamp ordering
    ExcessiveClockSkew(ClockSkew),
}

impl RejectReason {
    /// Taxonomy kind of this rejection
    pub fn kind(&self) -> FindingKind {
        match self {
            Self::IncompatibleVersion(_) => FindingKind::IncompatibleVersion,
            Self::ExcessiveClockSkew(_) => FindingKind::ExcessiveClockSkew,
        }
    }

    /// Values behind this rejection
    pub fn details(&self) -> FindingDetails {
        match self {
            Self::IncompatibleVersion(mismatch) => FindingDetails::Version(*mismatch),
            Self::ExcessiveClockSkew(skew) => FindingDetails::Skew(*skew),
        }
    }
}

/// The announced revisions or measured clocks a finding is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingDetails {
    /// Revisions announced by a peer outside our range
    Version(VersionMismatch),
    /// Local and peer clocks at evaluation time
    Skew(ClockSkew),
}

/// Revisions announced by a peer whose range does not meet ours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMismatch {
    /// Peer's newest revision, as announced
    pub peer_current_version: i64,
    /// Peer's oldest accepted revision, as announced
    pub peer_min_version: i64,
}

/// Both clocks at the moment of evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSkew {
    /// Local time, freshly read
    pub local_time: Timestamp,
    /// Time announced by the peer
    pub peer_time: Timestamp,
    /// `|peer_time - local_time|` in seconds
    pub delta: u64,
}

impl ClockSkew {
    /// Compare a fresh local reading with the peer's announced time
    pub fn measure(local_time: Timestamp, peer_time: Timestamp) -> Self {
        Self {
            local_time,
            peer_time,
            delta: peer_time.abs_diff(local_time),
        }
    }
}

/// Operator advisory for a link accepted with a notable clock delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkewWarning {
    /// Measured clocks, within the drop threshold
    pub skew: ClockSkew,
}

/// Classes of finding a handshake evaluation can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    /// Fatal, session-terminating
    IncompatibleVersion,
    /// Fatal, session-terminating, suppresses autoconnect
    ExcessiveClockSkew,
    /// Advisory, link proceeds
    NotableClockSkew,
}

impl FindingKind {
    /// True for findings that end the session
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotableClockSkew)
    }

    /// Severity to use for operator notices and logs
    pub fn severity(&self) -> Severity {
        if self.is_fatal() {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    /// Audience of the operator notice
    pub fn scope(&self) -> NoticeScope {
        match self {
            Self::NotableClockSkew => NoticeScope::NetworkWide,
            Self::IncompatibleVersion | Self::ExcessiveClockSkew => NoticeScope::LocalOperators,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleVersion => write!(f, "Incompatible protocol version"),
            Self::ExcessiveClockSkew => write!(f, "Excessive clock skew"),
            Self::NotableClockSkew => write!(f, "Notable clock skew"),
        }
    }
}

/// Severity attached to operator notices and log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Link proceeds
    Warning,
    /// Link dropped
    Error,
}

/// Which operators receive a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeScope {
    /// Operators on this server only
    LocalOperators,
    /// Operators across the whole network
    NetworkWide,
}
