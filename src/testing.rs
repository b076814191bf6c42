use std::{collections::VecDeque, vec::Vec};

use crate::{
    error::SensorError,
    sensor::{SensorChannel, SensorReader},
    sink::InputSink,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScriptError {
    Injected,
    Exhausted,
}

#[derive(Default)]
pub(crate) struct ScriptedReader {
    pressure: VecDeque<u16>,
    xs: VecDeque<u16>,
    ys: VecDeque<u16>,
    pressure_fail_after: Option<usize>,
    position_fail_after: Option<usize>,
    reads: [usize; 3],
}

impl ScriptedReader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_pressure(&mut self, values: &[u16]) {
        self.pressure.extend(values.iter().copied());
    }

    pub(crate) fn push_contact(&mut self) {
        self.push_pressure(&[300; 9]);
    }

    pub(crate) fn push_samples(&mut self, samples: &[(u16, u16)]) {
        for &(x, y) in samples {
            self.xs.push_back(x);
            self.ys.push_back(y);
        }
    }

    pub(crate) fn fail_pressure_after(&mut self, reads: usize) {
        self.pressure_fail_after = Some(reads);
    }

    pub(crate) fn fail_position_after(&mut self, reads: usize) {
        self.position_fail_after = Some(reads);
    }

    pub(crate) fn reads(&self, channel: SensorChannel) -> usize {
        self.reads[channel_index(channel)]
    }

    pub(crate) fn pending_samples(&self) -> usize {
        self.xs.len()
    }
}

impl SensorReader for ScriptedReader {
    type Error = ScriptError;

    fn read(&mut self, channel: SensorChannel) -> Result<u16, SensorError<Self::Error>> {
        let position_reads = self.reads[1] + self.reads[2];
        let (fail_after, done, queue) = match channel {
            SensorChannel::Pressure => (self.pressure_fail_after, self.reads[0], &mut self.pressure),
            SensorChannel::PositionX => (self.position_fail_after, position_reads, &mut self.xs),
            SensorChannel::PositionY => (self.position_fail_after, position_reads, &mut self.ys),
        };
        self.reads[channel_index(channel)] += 1;
        if fail_after.is_some_and(|limit| done >= limit) {
            return Err(SensorError::Bus(ScriptError::Injected));
        }
        queue
            .pop_front()
            .ok_or(SensorError::Bus(ScriptError::Exhausted))
    }
}

fn channel_index(channel: SensorChannel) -> usize {
    match channel {
        SensorChannel::Pressure => 0,
        SensorChannel::PositionX => 1,
        SensorChannel::PositionY => 2,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SinkCall {
    Touch(bool),
    Position(u16, u16),
    Sync,
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn take(&mut self) -> Vec<SinkCall> {
        core::mem::take(&mut self.calls)
    }
}

impl InputSink for RecordingSink {
    fn report_touch(&mut self, touching: bool) {
        self.calls.push(SinkCall::Touch(touching));
    }

    fn report_position(&mut self, x: u16, y: u16) {
        self.calls.push(SinkCall::Position(x, y));
    }

    fn sync(&mut self) {
        self.calls.push(SinkCall::Sync);
    }
}
