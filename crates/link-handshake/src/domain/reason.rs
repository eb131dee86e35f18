//! Diagnostic text for rejected and notable handshakes.
//!
//! The reason handed to the session terminator ends up in a fixed-size
//! diagnostic buffer on both servers, so it is clamped to
//! [`REASON_CAPACITY`] bytes including the terminator.

use std::fmt;

use super::decision::{ClockSkew, RejectReason, SkewWarning, VersionMismatch};

/// Size of the diagnostic buffer a termination reason must fit into
pub const REASON_CAPACITY: usize = 120;

/// Termination reason, never longer than `REASON_CAPACITY - 1` bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReasonText(String);

impl ReasonText {
    /// Longest text that fits the buffer alongside its terminator
    pub const MAX_LEN: usize = REASON_CAPACITY - 1;

    /// Build a reason, truncating on a UTF-8 boundary if needed
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.len() > Self::MAX_LEN {
            let mut end = Self::MAX_LEN;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        Self(text)
    }

    /// The clamped text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, at most `MAX_LEN`
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty reason
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for ReasonText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReasonText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.peer_current_version, self.peer_min_version)
    }
}

impl fmt::Display for ClockSkew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(my TS={}, their TS={}, delta={})",
            self.local_time, self.peer_time, self.delta
        )
    }
}

impl RejectReason {
    /// Reason sent to the peer and recorded on the closed session
    pub fn reason_text(&self) -> ReasonText {
        match self {
            Self::IncompatibleVersion(mismatch) => {
                ReasonText::new(format!("Incompatible TS version {mismatch}"))
            }
            Self::ExcessiveClockSkew(skew) => ReasonText::new(format!("Excessive TS delta {skew}")),
        }
    }

    /// Notice for operators, naming the dropped link
    pub fn operator_text(&self, link: &str) -> String {
        match self {
            Self::IncompatibleVersion(mismatch) => {
                format!("Link {link} dropped, wrong TS protocol version {mismatch}")
            }
            Self::ExcessiveClockSkew(skew) => {
                format!("Link {link} dropped, excessive TS delta {skew}")
            }
        }
    }
}

impl SkewWarning {
    /// Notice for operators, naming the link
    pub fn operator_text(&self, link: &str) -> String {
        format!("Link {link} notable TS delta {}", self.skew)
    }
}
