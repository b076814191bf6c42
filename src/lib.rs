//! Filter core for NS2009 resistive touchscreen controllers.
//!
//! Every poll cycle reads nine pressure samples, and only when all of them
//! report contact collects up to six coordinate pairs. The batch is screened
//! for range, jitter and spread, reduced to one point by a trimmed mean, and
//! handed to a pen up/down state machine that reports to an [`InputSink`].
//! Rejected cycles release the pen and earn a short backoff before the next
//! poll.

#![cfg_attr(not(test), no_std)]

pub mod aggregate;
pub mod collect;
pub mod config;
pub mod device;
pub mod error;
pub mod gate;
pub mod pipeline;
pub mod report;
pub mod scheduler;
pub mod sensor;
pub mod sink;
pub mod stats;
#[cfg(test)]
mod testing;
pub mod types;

pub use device::{DeviceInfo, TouchscreenProperties, NS2009_DEVICE};
pub use error::{CycleError, SensorError};
pub use pipeline::TouchFilter;
pub use report::{EventReporter, ReporterOutput};
pub use scheduler::{PollScheduler, TouchPoller};
pub use sensor::{Ns2009, SensorChannel, SensorReader};
pub use sink::{ChannelSink, InputSink};
pub use types::{CycleOutcome, FilterState, RejectReason, TouchEvent, TouchFrame, TouchPoint};
