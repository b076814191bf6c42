use crate::{
    aggregate::aggregate,
    collect::collect_samples,
    device::{DeviceInfo, TouchscreenProperties},
    error::CycleError,
    gate::{contact_active, read_pressure_batch},
    report::{EventReporter, ReporterOutput},
    sensor::SensorReader,
    sink::InputSink,
    types::{CycleOutcome, FilterState, RejectReason, TouchEvent, TouchPoint},
};

/// One NS2009 filter instance: gate, collect, aggregate, report.
pub struct TouchFilter {
    reporter: EventReporter,
}

impl Default for TouchFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchFilter {
    pub fn new() -> Self {
        Self {
            reporter: EventReporter::new(),
        }
    }

    pub fn with_properties(device: DeviceInfo, properties: TouchscreenProperties) -> Self {
        Self {
            reporter: EventReporter::with_properties(device, properties),
        }
    }

    pub fn state(&self) -> &FilterState {
        self.reporter.state()
    }

    pub fn reporter(&self) -> &EventReporter {
        &self.reporter
    }

    /// Runs one complete poll cycle at `now_ms`.
    pub fn poll<R, S>(&mut self, now_ms: u64, reader: &mut R, sink: &mut S) -> CycleOutcome
    where
        R: SensorReader,
        S: InputSink,
    {
        match self.sample(now_ms, reader) {
            Ok(Some(point)) => {
                let output = self.reporter.accept(now_ms, point, sink);
                if output.contains(TouchEvent::Down) {
                    CycleOutcome::Pressed {
                        x: point.x,
                        y: point.y,
                    }
                } else {
                    CycleOutcome::Moved {
                        x: point.x,
                        y: point.y,
                    }
                }
            }
            Ok(None) => {
                if released(self.reporter.contact_lost(sink)) {
                    CycleOutcome::Released
                } else {
                    CycleOutcome::Idle
                }
            }
            Err(CycleError::Sensor(err)) => {
                log::warn!("ns2009: read_error err={}", err);
                CycleOutcome::Rejected {
                    reason: RejectReason::SensorError,
                    released: false,
                }
            }
            Err(CycleError::Rejected(reason)) => {
                let output = self.reporter.reject(reason, sink);
                CycleOutcome::Rejected {
                    reason,
                    released: released(output),
                }
            }
        }
    }

    /// `Ok(None)` means no contact this cycle.
    fn sample<R: SensorReader>(
        &self,
        now_ms: u64,
        reader: &mut R,
    ) -> Result<Option<TouchPoint>, CycleError<R::Error>> {
        let pressure = read_pressure_batch(reader)?;
        if !contact_active(&pressure) {
            return Ok(None);
        }
        let batch = collect_samples(reader, self.reporter.state(), now_ms)?;
        let point = aggregate(&batch)?;
        Ok(Some(point))
    }
}

fn released(output: ReporterOutput) -> bool {
    output.contains(TouchEvent::Up)
}
