use crate::config::{TOUCH_COUNT_TOTAL, TOUCH_PRESSURE_SAMPLES};

pub type PressureBatch = [u16; TOUCH_PRESSURE_SAMPLES];
pub type SampleBatch = heapless::Vec<TouchPoint, TOUCH_COUNT_TOTAL>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEvent {
    Down,
    Move { x: u16, y: u16 },
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    InsufficientSamples,
    ExcessiveVariance,
    OutOfRange,
    JitterSpike,
    SensorError,
}

impl RejectReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::InsufficientSamples => "insufficient_samples",
            Self::ExcessiveVariance => "excessive_variance",
            Self::OutOfRange => "out_of_range",
            Self::JitterSpike => "jitter_spike",
            Self::SensorError => "sensor_error",
        }
    }
}

/// Debounce state carried from one poll cycle to the next.
///
/// Position and timestamp only move on an accepted report; losing contact
/// clears `pen_down` but keeps the last real position for the jitter check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub last_x: u16,
    pub last_y: u16,
    pub last_timestamp: u64,
    pub pen_down: bool,
}

impl FilterState {
    pub const fn new() -> Self {
        Self {
            last_x: 0,
            last_y: 0,
            last_timestamp: 0,
            pen_down: false,
        }
    }

    pub fn last_point(&self) -> TouchPoint {
        TouchPoint::new(self.last_x, self.last_y)
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_timestamp)
    }

    pub(crate) fn accept(&mut self, now_ms: u64, point: TouchPoint) {
        self.last_x = point.x;
        self.last_y = point.y;
        self.last_timestamp = self.last_timestamp.max(now_ms);
        self.pen_down = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    Idle,
    Pressed { x: u16, y: u16 },
    Moved { x: u16, y: u16 },
    Released,
    Rejected { reason: RejectReason, released: bool },
}

impl CycleOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// One synchronized group of sink updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchFrame {
    pub touch: Option<bool>,
    pub position: Option<(u16, u16)>,
}

impl TouchFrame {
    pub fn is_empty(&self) -> bool {
        self.touch.is_none() && self.position.is_none()
    }
}
