//! # Driving Ports (Inbound API)
//!
//! The API this crate exposes to the transport layer.

use crate::domain::{Decision, HandshakeAnnouncement, PeerId};
use crate::error::HandshakeResult;

/// Entry point for handshake announcements.
pub trait LinkHandshakeApi {
    /// Handle an announcement as delivered by the transport.
    ///
    /// `session` is the directly connected server, `origin` the server the
    /// message claims to come from. Announcements are never relayed, so when
    /// they differ the announcement is dropped without side effects and
    /// [`HandshakeError::RelayedAnnouncement`](crate::HandshakeError::RelayedAnnouncement)
    /// is returned.
    fn on_announcement(
        &self,
        session: PeerId,
        origin: PeerId,
        announcement: &HandshakeAnnouncement,
    ) -> HandshakeResult<Decision>;

    /// Evaluate an announcement from a direct peer and carry out the
    /// consequences: notices, log entries, autoconnect suppression, teardown.
    ///
    /// Does not apply the direct-peer check. Call it only for announcements
    /// the transport already knows came from `peer` itself; otherwise use
    /// [`on_announcement`](Self::on_announcement).
    fn evaluate(&self, peer: PeerId, announcement: &HandshakeAnnouncement) -> Decision;
}
