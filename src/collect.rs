use crate::{
    config::{
        TOUCH_COUNT_TOTAL, TOUCH_JITTER_MAX_DISTANCE, TOUCH_JITTER_WINDOW_MS, TOUCH_SAMPLE_MAX,
        TOUCH_SAMPLE_MIN,
    },
    error::CycleError,
    sensor::{SensorChannel, SensorReader},
    stats::distance,
    types::{FilterState, RejectReason, SampleBatch, TouchPoint},
};

/// Gathers up to `TOUCH_COUNT_TOTAL` coordinate pairs for one cycle.
///
/// A saturated or floor-level pair ends collection early but keeps what was
/// already gathered. A pair that jumps too far from the last accepted report
/// within the jitter window invalidates the whole cycle.
pub fn collect_samples<R: SensorReader>(
    reader: &mut R,
    state: &FilterState,
    now_ms: u64,
) -> Result<SampleBatch, CycleError<R::Error>> {
    let mut batch = SampleBatch::new();
    let jitter_armed = state.elapsed_ms(now_ms) <= TOUCH_JITTER_WINDOW_MS;
    let last = state.last_point();

    for _ in 0..TOUCH_COUNT_TOTAL {
        let x = reader.read(SensorChannel::PositionX)?;
        let y = reader.read(SensorChannel::PositionY)?;
        let sample = TouchPoint::new(x, y);

        if x > TOUCH_SAMPLE_MAX || y > TOUCH_SAMPLE_MAX {
            log::debug!("ns2009: sample_saturated x={} y={} kept={}", x, y, batch.len());
            break;
        }
        if x < TOUCH_SAMPLE_MIN || y < TOUCH_SAMPLE_MIN {
            log::debug!("ns2009: sample_floor x={} y={} kept={}", x, y, batch.len());
            break;
        }

        if jitter_armed {
            let jump = distance(last, sample);
            if jump > TOUCH_JITTER_MAX_DISTANCE {
                log::debug!(
                    "ns2009: jitter_spike distance={} elapsed_ms={}",
                    jump,
                    state.elapsed_ms(now_ms)
                );
                return Err(RejectReason::JitterSpike.into());
            }
        }

        if batch.push(sample).is_err() {
            break;
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests;
