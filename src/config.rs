// Tick unit for every `*_MS` value below is one millisecond of `embassy_time::Instant`.

pub const TOUCH_POLL_INTERVAL_MS: u64 = 30;
// One-shot settle delay after a rejected or failed cycle.
pub const TOUCH_REJECT_BACKOFF_MS: u64 = 10;

pub const TOUCH_RAW_MAX: u16 = 0x0fff;

pub const TOUCH_PRESSURE_SAMPLES: usize = 9;
// Z1 stays slightly above zero while the pen is up; the floor is empirical.
pub const TOUCH_PRESSURE_CONTACT_MIN: u16 = 40;

pub const TOUCH_COUNT_TOTAL: usize = 6;
pub const TOUCH_COUNT_VALID: usize = 4;
pub const TOUCH_SAMPLE_MIN: u16 = 80;
pub const TOUCH_SAMPLE_MAX: u16 = 3900;

pub const TOUCH_JITTER_WINDOW_MS: u64 = 30;
pub const TOUCH_JITTER_MAX_DISTANCE: u32 = 800;

pub const TOUCH_VARIANCE_MAX: u32 = 800;
pub const TOUCH_REPORT_MAX: u16 = 4000;

pub const NS2009_DEFAULT_ADDR: u8 = 0x48;
pub const NS2009_DEVICE_NAME: &str = "ns2009_ts";
pub const NS2009_DEVICE_PHYS: &str = "input/ts";
pub const NS2009_X_FUZZ: u16 = 32;
pub const NS2009_Y_FUZZ: u16 = 16;
