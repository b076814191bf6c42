use crate::{
    config::{TOUCH_COUNT_TOTAL, TOUCH_COUNT_VALID, TOUCH_REPORT_MAX, TOUCH_VARIANCE_MAX},
    stats::{sort_ascending, variance},
    types::{RejectReason, TouchPoint},
};

/// Reduces a collected batch to one coordinate.
///
/// Each axis is checked for spread, sorted, and averaged without its
/// smallest and largest value. Axes are trimmed independently, so the x and
/// y extremes may come from different samples.
pub fn aggregate(samples: &[TouchPoint]) -> Result<TouchPoint, RejectReason> {
    let n = samples.len().min(TOUCH_COUNT_TOTAL);
    if n < TOUCH_COUNT_VALID {
        log::debug!("ns2009: reject reason=insufficient_samples count={}", n);
        return Err(RejectReason::InsufficientSamples);
    }

    let mut xs = [0u16; TOUCH_COUNT_TOTAL];
    let mut ys = [0u16; TOUCH_COUNT_TOTAL];
    for (idx, sample) in samples[..n].iter().enumerate() {
        xs[idx] = sample.x;
        ys[idx] = sample.y;
    }
    let (xs, ys) = (&mut xs[..n], &mut ys[..n]);

    let var_x = variance(xs);
    let var_y = variance(ys);
    if var_x > TOUCH_VARIANCE_MAX || var_y > TOUCH_VARIANCE_MAX {
        log::debug!(
            "ns2009: reject reason=excessive_variance var_x={} var_y={}",
            var_x,
            var_y
        );
        return Err(RejectReason::ExcessiveVariance);
    }

    sort_ascending(xs);
    sort_ascending(ys);
    let x = trimmed_mean(xs).ok_or(RejectReason::OutOfRange)?;
    let y = trimmed_mean(ys).ok_or(RejectReason::OutOfRange)?;

    if x > TOUCH_REPORT_MAX || y > TOUCH_REPORT_MAX {
        log::debug!("ns2009: reject reason=out_of_range x={} y={}", x, y);
        return Err(RejectReason::OutOfRange);
    }
    Ok(TouchPoint::new(x, y))
}

/// Mean of a sorted slice without its first and last entry.
pub fn trimmed_mean(sorted: &[u16]) -> Option<u16> {
    let inner = sorted.get(1..sorted.len().checked_sub(1)?)?;
    if inner.is_empty() {
        return None;
    }
    let sum: u32 = inner.iter().map(|&v| v as u32).sum();
    Some((sum / inner.len() as u32) as u16)
}
