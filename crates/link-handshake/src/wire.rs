//! Positional wire parameters of the handshake message.
//!
//! ```text
//! <current revision> <min revision> <reserved, sent as 0> <UTC seconds>
//! ```
//!
//! Parameters after the fourth are tolerated and ignored.

use std::str::FromStr;

use crate::domain::{HandshakeAnnouncement, Timestamp};
use crate::error::{HandshakeError, HandshakeResult};

/// Number of parameters a handshake carries
pub const HANDSHAKE_PARAMS: usize = 4;

impl HandshakeAnnouncement {
    /// Parse the positional parameters of a received handshake
    ///
    /// # Errors
    ///
    /// `MissingParameters` with fewer than four parameters, `MalformedHandshake`
    /// when a parameter is not an integer. Revisions and the time must also fit
    /// an `i64`; the reserved parameter may be any integer.
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> HandshakeResult<Self> {
        if params.len() < HANDSHAKE_PARAMS {
            return Err(HandshakeError::MissingParameters {
                expected: HANDSHAKE_PARAMS,
                actual: params.len(),
            });
        }

        let peer_current_version = parse_field("peer_current_version", params[0].as_ref())?;
        let peer_min_version = parse_field("peer_min_version", params[1].as_ref())?;
        check_integer("reserved", params[2].as_ref())?;
        let peer_time = parse_field("peer_time", params[3].as_ref())?;

        Ok(Self::new(
            peer_current_version,
            peer_min_version,
            Timestamp::new(peer_time),
        ))
    }

    /// Render as positional parameters for sending
    pub fn to_params(&self) -> [String; HANDSHAKE_PARAMS] {
        [
            self.peer_current_version.to_string(),
            self.peer_min_version.to_string(),
            "0".to_string(),
            self.peer_time.to_string(),
        ]
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> HandshakeResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| HandshakeError::MalformedHandshake {
            field,
            value: value.to_string(),
        })
}

/// Optional sign followed by at least one decimal digit, of any length
fn check_integer(field: &'static str, value: &str) -> HandshakeResult<()> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HandshakeError::MalformedHandshake {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
