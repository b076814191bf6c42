use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

use crate::types::TouchFrame;

/// Consumer of touch reports.
///
/// Updates between two `sync` calls form one group; consumers must only act
/// on a group once `sync` has been issued.
pub trait InputSink {
    fn report_touch(&mut self, touching: bool);
    fn report_position(&mut self, x: u16, y: u16);
    fn sync(&mut self);
}

impl<S: InputSink + ?Sized> InputSink for &mut S {
    fn report_touch(&mut self, touching: bool) {
        (**self).report_touch(touching);
    }

    fn report_position(&mut self, x: u16, y: u16) {
        (**self).report_position(x, y);
    }

    fn sync(&mut self) {
        (**self).sync();
    }
}

/// Publishes every synchronized group as one `TouchFrame`.
pub struct ChannelSink<'a, M: RawMutex, const N: usize> {
    channel: &'a Channel<M, TouchFrame, N>,
    pending: TouchFrame,
    dropped: u32,
}

impl<'a, M: RawMutex, const N: usize> ChannelSink<'a, M, N> {
    pub fn new(channel: &'a Channel<M, TouchFrame, N>) -> Self {
        Self {
            channel,
            pending: TouchFrame::default(),
            dropped: 0,
        }
    }

    pub fn dropped_frames(&self) -> u32 {
        self.dropped
    }
}

impl<M: RawMutex, const N: usize> InputSink for ChannelSink<'_, M, N> {
    fn report_touch(&mut self, touching: bool) {
        self.pending.touch = Some(touching);
    }

    fn report_position(&mut self, x: u16, y: u16) {
        self.pending.position = Some((x, y));
    }

    fn sync(&mut self) {
        let frame = core::mem::take(&mut self.pending);
        if frame.is_empty() {
            return;
        }
        // Never block the poll cycle on a slow consumer.
        if self.channel.try_send(frame).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            log::warn!("ns2009: frame_dropped total={}", self.dropped);
        }
    }
}
