use crate::types::TouchPoint;

/// Two-pass population variance with truncating integer division.
pub fn variance(values: &[u16]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as u32;
    let mean = values.iter().map(|&v| v as u32).sum::<u32>() / n;
    let ssd = values
        .iter()
        .map(|&v| {
            let d = (v as u32).abs_diff(mean);
            d * d
        })
        .fold(0u32, u32::saturating_add);
    ssd / n
}

pub fn sort_ascending(values: &mut [u16]) {
    values.sort_unstable();
}

pub fn squared_distance(a: TouchPoint, b: TouchPoint) -> u32 {
    let dx = (a.x as u32).abs_diff(b.x as u32);
    let dy = (a.y as u32).abs_diff(b.y as u32);
    dx * dx + dy * dy
}

pub fn distance(a: TouchPoint, b: TouchPoint) -> u32 {
    int_sqrt(squared_distance(a, b))
}

/// Floor of the square root.
pub fn int_sqrt(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }
    let mut lo = 0u32;
    let mut hi = value.min(65_535) + 1;
    while lo + 1 < hi {
        let mid = lo + (hi - lo) / 2;
        if mid * mid <= value {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
