//! # Link Handshake Validation
//!
//! Decides whether a freshly negotiated server-to-server link is viable.
//!
//! Once a peer server has finished capability negotiation it announces four
//! values: the newest protocol revision it speaks, the oldest revision it still
//! accepts, a reserved integer, and its idea of the current UTC time. This crate
//! checks that the two revision ranges overlap and that the two clocks agree
//! closely enough for timestamp-based conflict resolution to stay consistent
//! across the network.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** Pure evaluation (revision overlap, skew policy, reason text)
//! - **Ports Layer:** Trait definitions for the clock and the teardown/notice collaborators
//! - **Service Layer:** Wires domain decisions to the outbound ports
//! - **Adapters Layer:** System and cached clocks, tracing-backed sinks, config providers
//!
//! ```text
//! Transport ──HandshakeAnnouncement──→ LinkHandshakeService
//!                                          │
//!                                          ├── domain::evaluate ──→ Decision
//!                                          │
//!                                          ├── reject ──→ OperatorNotifier + LinkLog + SessionTerminator
//!                                          ├── excessive skew ──→ AutoconnectControl
//!                                          └── notable skew ──→ OperatorNotifier + LinkLog
//! ```
//!
//! ## Example
//!
//! ```rust
//! use link_handshake::{
//!     evaluate, ClockSource, HandshakeAnnouncement, LocalNodeState, SkewPolicy, SystemClock,
//!     VersionRange,
//! };
//!
//! let local = LocalNodeState::new(VersionRange::new(3, 6), SkewPolicy::new(30, 300));
//! let clock = SystemClock::new();
//!
//! // A peer whose clock agrees with ours
//! let announcement = HandshakeAnnouncement::new(6, 3, clock.refresh());
//! let decision = evaluate(&local, &announcement, &clock);
//! assert!(decision.is_accepted());
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod wire;

/// Clocks, tracing-backed collaborators and config providers.
pub mod adapters;

/// Deterministic clocks and recording collaborators.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use config::HandshakeConfig;
pub use domain::{
    evaluate, ClockSkew, Decision, FindingDetails, FindingKind, HandshakeAnnouncement,
    LocalNodeState, NoticeScope, PeerId, ReasonText, RejectReason, Severity, SkewClass, SkewPolicy,
    SkewWarning, Timestamp, VersionMismatch, VersionRange, REASON_CAPACITY,
};
pub use error::{ConfigError, HandshakeError, HandshakeResult};
pub use ports::{
    AutoconnectControl, ClockSource, ConfigProvider, LinkHandshakeApi, LinkLog, LinkLogEntry,
    OperatorNotice, OperatorNotifier, PeerDirectory, SessionTerminator,
};
pub use service::{LinkCollaborators, LinkHandshakeService};

#[cfg(feature = "config-file")]
pub use adapters::TomlConfigProvider;
pub use adapters::{CachedClock, StaticConfigProvider, SystemClock, TracingLinkLog, TracingNotifier};
