use statig::blocking::{IntoStateMachineExt as _, StateMachine};

use crate::{
    device::{DeviceInfo, TouchscreenProperties, NS2009_DEVICE},
    sink::InputSink,
    types::{FilterState, RejectReason, TouchEvent, TouchPoint},
};

mod hsm;

use hsm::PenHsm;

#[derive(Clone, Copy, Debug)]
enum PenEvent {
    Accepted { now_ms: u64, point: TouchPoint },
    ContactLost,
    Rejected(RejectReason),
}

/// Events produced by one reporter dispatch, in emission order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReporterOutput {
    pub events: [Option<TouchEvent>; 2],
}

impl ReporterOutput {
    pub fn is_empty(&self) -> bool {
        self.events[0].is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = TouchEvent> + '_ {
        self.events.iter().flatten().copied()
    }

    pub fn contains(&self, event: TouchEvent) -> bool {
        self.iter().any(|item| item == event)
    }
}

struct DispatchContext {
    filter: FilterState,
    events: [Option<TouchEvent>; 2],
}

impl DispatchContext {
    fn new(filter: FilterState) -> Self {
        Self {
            filter,
            events: [None; 2],
        }
    }

    fn emit(&mut self, event: TouchEvent) {
        for slot in &mut self.events {
            if slot.is_none() {
                *slot = Some(event);
                return;
            }
        }
    }

    fn accept(&mut self, now_ms: u64, point: TouchPoint) {
        self.filter.accept(now_ms, point);
    }

    fn release(&mut self) {
        self.emit(TouchEvent::Up);
        self.filter.pen_down = false;
    }

    fn finish(self) -> ReporterOutput {
        ReporterOutput {
            events: self.events,
        }
    }
}

/// Pen up/down debounce. Owns the only copy of `FilterState`.
pub struct EventReporter {
    machine: StateMachine<PenHsm>,
    state: FilterState,
    device: DeviceInfo,
    properties: TouchscreenProperties,
}

impl Default for EventReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventReporter {
    pub fn new() -> Self {
        Self::with_properties(NS2009_DEVICE, TouchscreenProperties::default())
    }

    pub fn with_properties(device: DeviceInfo, properties: TouchscreenProperties) -> Self {
        Self {
            machine: PenHsm.state_machine(),
            state: FilterState::new(),
            device,
            properties,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_pen_down(&self) -> bool {
        self.state.pen_down
    }

    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    pub fn properties(&self) -> TouchscreenProperties {
        self.properties
    }

    pub fn accept<S: InputSink>(
        &mut self,
        now_ms: u64,
        point: TouchPoint,
        sink: &mut S,
    ) -> ReporterOutput {
        self.dispatch(PenEvent::Accepted { now_ms, point }, sink)
    }

    pub fn contact_lost<S: InputSink>(&mut self, sink: &mut S) -> ReporterOutput {
        self.dispatch(PenEvent::ContactLost, sink)
    }

    /// Treats an unreliable batch as lost contact. Sensor faults are not
    /// pen evidence either way and leave the state untouched.
    pub fn reject<S: InputSink>(&mut self, reason: RejectReason, sink: &mut S) -> ReporterOutput {
        if reason == RejectReason::SensorError {
            return ReporterOutput::default();
        }
        self.dispatch(PenEvent::Rejected(reason), sink)
    }

    fn dispatch<S: InputSink>(&mut self, event: PenEvent, sink: &mut S) -> ReporterOutput {
        let mut context = DispatchContext::new(self.state);
        self.machine.handle_with_context(&event, &mut context);
        self.state = context.filter;
        let output = context.finish();
        self.publish(&output, sink);
        output
    }

    fn publish<S: InputSink>(&self, output: &ReporterOutput, sink: &mut S) {
        if output.is_empty() {
            return;
        }
        for event in output.iter() {
            match event {
                TouchEvent::Down => {
                    log::debug!("ns2009: pen_down");
                    sink.report_touch(true);
                }
                TouchEvent::Move { x, y } => {
                    let point = self.properties.apply(&self.device, TouchPoint::new(x, y));
                    sink.report_position(point.x, point.y);
                }
                TouchEvent::Up => {
                    log::debug!("ns2009: pen_up");
                    sink.report_touch(false);
                }
            }
        }
        sink.sync();
    }
}
