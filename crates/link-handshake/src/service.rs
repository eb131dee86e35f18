//! Link Handshake Service - wires domain decisions to the host server
//!
//! The domain layer only decides. This service carries out what a decision
//! implies, in a fixed order:
//!
//! | Decision | Notice | Log | Autoconnect | Terminate |
//! |----------|--------|-----|-------------|-----------|
//! | Incompatible version | local, error | yes | - | yes |
//! | Excessive skew | local, error | yes | disabled | yes |
//! | Notable skew | network-wide, warning | yes | - | - |
//! | Accepted | - | - | - | - |

use std::sync::Arc;

use tracing::debug;

use crate::config::HandshakeConfig;
use crate::domain::{
    evaluate, Decision, FindingDetails, FindingKind, HandshakeAnnouncement, LocalNodeState,
    PeerId, RejectReason, SkewWarning,
};
use crate::error::{HandshakeError, HandshakeResult};
use crate::ports::{
    AutoconnectControl, ClockSource, ConfigProvider, LinkHandshakeApi, LinkLog, LinkLogEntry,
    OperatorNotice, OperatorNotifier, PeerDirectory, SessionTerminator,
};

/// The host-side collaborators a handshake decision is carried out through
#[derive(Clone)]
pub struct LinkCollaborators {
    pub terminator: Arc<dyn SessionTerminator>,
    pub autoconnect: Arc<dyn AutoconnectControl>,
    pub notifier: Arc<dyn OperatorNotifier>,
    pub log: Arc<dyn LinkLog>,
    pub directory: Arc<dyn PeerDirectory>,
}

/// Link handshake service implementing the driving port.
///
/// Holds no per-peer state: every evaluation reads the immutable local state
/// and the shared clock, so one service can serve concurrent handshakes.
///
/// # Example
///
/// ```rust,ignore
/// let service = LinkHandshakeService::new(
///     HandshakeConfig::default(),
///     Arc::new(CachedClock::new(SystemClock::new())),
///     collaborators,
/// )?;
///
/// let announcement = HandshakeAnnouncement::from_params(&params)?;
/// match service.on_announcement(session, origin, &announcement) {
///     Ok(decision) if decision.is_accepted() => { /* continue burst */ }
///     Ok(_) => { /* session already terminated */ }
///     Err(HandshakeError::RelayedAnnouncement) => { /* ignored */ }
///     Err(e) => return Err(e),
/// }
/// ```
pub struct LinkHandshakeService {
    local: LocalNodeState,
    clock: Arc<dyn ClockSource>,
    collaborators: LinkCollaborators,
}

impl LinkHandshakeService {
    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns `HandshakeError::Config` when `config` fails validation.
    pub fn new(
        config: HandshakeConfig,
        clock: Arc<dyn ClockSource>,
        collaborators: LinkCollaborators,
    ) -> HandshakeResult<Self> {
        let local = config.local_state()?;
        Ok(Self {
            local,
            clock,
            collaborators,
        })
    }

    /// Create a service from a config provider.
    pub fn from_provider(
        provider: &dyn ConfigProvider,
        clock: Arc<dyn ClockSource>,
        collaborators: LinkCollaborators,
    ) -> HandshakeResult<Self> {
        Self::new(provider.handshake_config(), clock, collaborators)
    }

    /// Local revision range and skew policy.
    pub fn local_state(&self) -> &LocalNodeState {
        &self.local
    }

    /// The announcement to send to a new peer, stamped with a fresh clock reading.
    pub fn local_announcement(&self) -> HandshakeAnnouncement {
        HandshakeAnnouncement::local(self.local.versions, self.clock.refresh())
    }

    fn reject(&self, peer: PeerId, reason: &RejectReason) {
        let kind = reason.kind();
        let server_name = self.collaborators.directory.server_name(peer);
        let display_name = self.collaborators.directory.display_name(peer);

        self.collaborators.notifier.notify(OperatorNotice {
            severity: kind.severity(),
            scope: kind.scope(),
            text: reason.operator_text(&server_name),
        });
        self.collaborators.log.record(LinkLogEntry {
            peer: display_name.clone(),
            kind,
            severity: kind.severity(),
            details: reason.details(),
            message: reason.operator_text(&display_name),
        });

        if kind == FindingKind::ExcessiveClockSkew {
            self.collaborators.autoconnect.disable_autoconnect(&server_name);
        }

        self.collaborators
            .terminator
            .terminate(peer, &reason.reason_text());
    }

    fn advise(&self, peer: PeerId, warning: &SkewWarning) {
        let kind = FindingKind::NotableClockSkew;
        let server_name = self.collaborators.directory.server_name(peer);
        let display_name = self.collaborators.directory.display_name(peer);

        self.collaborators.notifier.notify(OperatorNotice {
            severity: kind.severity(),
            scope: kind.scope(),
            text: warning.operator_text(&server_name),
        });
        self.collaborators.log.record(LinkLogEntry {
            peer: display_name.clone(),
            kind,
            severity: kind.severity(),
            details: FindingDetails::Skew(warning.skew),
            message: warning.operator_text(&display_name),
        });
    }
}

impl LinkHandshakeApi for LinkHandshakeService {
    fn on_announcement(
        &self,
        session: PeerId,
        origin: PeerId,
        announcement: &HandshakeAnnouncement,
    ) -> HandshakeResult<Decision> {
        if session != origin {
            debug!(
                %session,
                %origin,
                "Ignoring handshake announcement not sent by the direct peer"
            );
            return Err(HandshakeError::RelayedAnnouncement);
        }

        Ok(self.evaluate(session, announcement))
    }

    fn evaluate(&self, peer: PeerId, announcement: &HandshakeAnnouncement) -> Decision {
        let decision = evaluate(&self.local, announcement, self.clock.as_ref());

        match &decision {
            Decision::Rejected(reason) => self.reject(peer, reason),
            Decision::Accepted {
                warning: Some(warning),
            } => self.advise(peer, warning),
            Decision::Accepted { warning: None } => {
                debug!(
                    %peer,
                    peer_current_version = announcement.peer_current_version,
                    peer_min_version = announcement.peer_min_version,
                    "Link handshake accepted"
                );
            }
        }

        decision
    }
}
