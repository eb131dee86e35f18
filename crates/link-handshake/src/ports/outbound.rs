//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this crate **requires** the host server to implement.
//! None of them are fallible from the validator's point of view: delivery
//! problems belong to the host.

use crate::config::HandshakeConfig;
use crate::domain::{
    FindingDetails, FindingKind, NoticeScope, PeerId, ReasonText, Severity, Timestamp,
};

/// Source of the local wall-clock time.
///
/// `refresh` is called once per evaluated handshake, after the revision check
/// passes, and must return a fresh reading rather than a stale cached value.
///
/// # Thread Safety
///
/// Handshakes for different peers may be evaluated concurrently, so
/// implementations must tolerate concurrent `refresh` calls. Reading the system
/// clock already does.
pub trait ClockSource: Send + Sync {
    /// Read the current time, updating any cached copy.
    fn refresh(&self) -> Timestamp;
}

/// Closes a peer session.
pub trait SessionTerminator: Send + Sync {
    /// Close the connection and release its resources.
    ///
    /// `reason` is shown to the peer and fits the diagnostic buffer.
    fn terminate(&self, peer: PeerId, reason: &ReasonText);
}

/// Controls automatic reconnection to configured peers.
pub trait AutoconnectControl: Send + Sync {
    /// Stop automatic reconnection attempts to `server_name` until an operator
    /// changes the configuration.
    fn disable_autoconnect(&self, server_name: &str);
}

/// A notice for server operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorNotice {
    pub severity: Severity,
    pub scope: NoticeScope,
    /// Human-readable text naming the link
    pub text: String,
}

/// Delivers notices to server operators.
pub trait OperatorNotifier: Send + Sync {
    fn notify(&self, notice: OperatorNotice);
}

/// A structured server log entry about a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkLogEntry {
    /// Display name as resolved by [`PeerDirectory::display_name`]
    pub peer: String,
    pub kind: FindingKind,
    pub severity: Severity,
    /// Announced revisions or measured clocks, for structured fields
    pub details: FindingDetails,
    /// The same finding as one line of text
    pub message: String,
}

/// Persistent server log.
pub trait LinkLog: Send + Sync {
    fn record(&self, entry: LinkLogEntry);
}

/// Resolves session handles to names.
pub trait PeerDirectory: Send + Sync {
    /// Bare server name, used for operator notices and autoconnect lookup.
    fn server_name(&self, peer: PeerId) -> String;

    /// Name for the server log, typically including the remote address.
    fn display_name(&self, peer: PeerId) -> String;
}

/// Abstract interface for configuration loading.
pub trait ConfigProvider: Send + Sync {
    /// Protocol revisions and skew thresholds.
    fn handshake_config(&self) -> HandshakeConfig;
}
