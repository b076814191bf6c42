use core::fmt;

use crate::{sensor::SensorChannel, types::RejectReason};

#[derive(Debug, PartialEq, Eq)]
pub enum SensorError<E> {
    Bus(E),
    /// The controller returned a word with non-zero padding bits.
    InvalidReading {
        channel: SensorChannel,
        raw: [u8; 2],
    },
}

impl<E> From<E> for SensorError<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}

impl<E: fmt::Debug> fmt::Display for SensorError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "bus error: {err:?}"),
            Self::InvalidReading { channel, raw } => write!(
                f,
                "invalid {} reading {:02x}{:02x}",
                channel.label(),
                raw[0],
                raw[1]
            ),
        }
    }
}

/// Why a poll cycle ended without a usable coordinate.
#[derive(Debug, PartialEq, Eq)]
pub enum CycleError<E> {
    Sensor(SensorError<E>),
    Rejected(RejectReason),
}

impl<E> CycleError<E> {
    pub fn reason(&self) -> RejectReason {
        match self {
            Self::Sensor(_) => RejectReason::SensorError,
            Self::Rejected(reason) => *reason,
        }
    }
}

impl<E> From<SensorError<E>> for CycleError<E> {
    fn from(value: SensorError<E>) -> Self {
        Self::Sensor(value)
    }
}

impl<E> From<RejectReason> for CycleError<E> {
    fn from(value: RejectReason) -> Self {
        Self::Rejected(value)
    }
}
