//! Handshake evaluation (security-critical).
//!
//! Accepting a peer whose clock is far off corrupts timestamp-based conflict
//! resolution for the whole network. Keep this isolated for audits.

use crate::ports::ClockSource;

use super::decision::{ClockSkew, Decision, RejectReason, SkewWarning, VersionMismatch};
use super::types::{HandshakeAnnouncement, LocalNodeState, SkewClass};

/// Evaluate a peer's handshake announcement against the local state
///
/// # Algorithm
/// 1. Revision overlap: `[local.min, local.current]` must meet
///    `[peer.min, peer.current]`. On failure nothing else is evaluated.
/// 2. Refresh the local clock from `clock`.
/// 3. `delta = |peer_time - local_time|`
/// 4. `delta > max` rejects, `delta > warn` accepts with a warning, anything
///    else accepts silently.
pub fn evaluate<C>(
    local: &LocalNodeState,
    announcement: &HandshakeAnnouncement,
    clock: &C,
) -> Decision
where
    C: ClockSource + ?Sized,
{
    // Filter 1: Protocol revision overlap
    if !local.versions.overlaps(&announcement.peer_versions()) {
        return Decision::Rejected(RejectReason::IncompatibleVersion(VersionMismatch {
            peer_current_version: announcement.peer_current_version,
            peer_min_version: announcement.peer_min_version,
        }));
    }

    // Filter 2: Clock skew, against a fresh reading
    let skew = ClockSkew::measure(clock.refresh(), announcement.peer_time);

    match local.skew_policy.classify(skew.delta) {
        SkewClass::Excessive => Decision::Rejected(RejectReason::ExcessiveClockSkew(skew)),
        SkewClass::Notable => Decision::Accepted {
            warning: Some(SkewWarning { skew }),
        },
        SkewClass::Tolerable => Decision::accepted(),
    }
}
