//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** APIs this crate exposes to the transport
//! - **Driven Ports (Outbound):** SPIs this crate requires from the host server

pub mod inbound;
pub mod outbound;

pub use inbound::LinkHandshakeApi;
pub use outbound::{
    AutoconnectControl, ClockSource, ConfigProvider, LinkLog, LinkLogEntry, OperatorNotice,
    OperatorNotifier, PeerDirectory, SessionTerminator,
};
