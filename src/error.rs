//! Error types shared across subsystem boundaries.
//!
//! Both enums describe recoverable conditions: the sensor hub retains its
//! last good reading on a failed DHT transfer, and the sync layer logs a
//! network failure and carries on.  `Copy` throughout, no allocation.
//! Adapters with purely local failure modes (WiFi credential validation,
//! peripheral init) carry their own error enums next to their code.

use core::fmt;

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Single-wire DHT handshake timed out mid-transfer.
    DhtTimeout,
    /// DHT frame arrived but its checksum did not match.
    DhtChecksum,
    /// Reading is outside the physically plausible range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DhtTimeout => write!(f, "DHT transfer timed out"),
            Self::DhtChecksum => write!(f, "DHT checksum mismatch"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

/// Network-layer failures.  These are swallowed at the sync boundary (the
/// loop never dies on a flaky network) but always logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// TCP/HTTP transport failure (connect, send, receive, or timeout).
    Transport,
    /// Response body was not the JSON shape the endpoint promises.
    UnexpectedResponse,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "HTTP transport failed"),
            Self::UnexpectedResponse => write!(f, "unexpected response payload"),
        }
    }
}
