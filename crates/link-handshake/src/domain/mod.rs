//! Domain Layer - Pure handshake evaluation with no I/O
//!
//! This module contains:
//! - Protocol revision ranges and the overlap check
//! - Clock-skew measurement and the warn/max policy
//! - The evaluation outcome and its bounded diagnostic text

mod decision;
mod reason;
mod types;
mod validator;

pub use decision::{
    ClockSkew, Decision, FindingDetails, FindingKind, NoticeScope, RejectReason, Severity, SkewWarning,
    VersionMismatch,
};
pub use reason::{ReasonText, REASON_CAPACITY};
pub use types::{
    HandshakeAnnouncement, LocalNodeState, PeerId, SkewClass, SkewPolicy, Timestamp, VersionRange,
};
pub use validator::evaluate;
