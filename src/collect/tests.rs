use super::*;
use crate::testing::{ScriptError, ScriptedReader};
use crate::error::SensorError;

fn settled_state() -> FilterState {
    FilterState::new()
}

fn touched_at(t_ms: u64, x: u16, y: u16) -> FilterState {
    let mut state = FilterState::new();
    state.accept(t_ms, TouchPoint::new(x, y));
    state
}

#[test]
fn collects_six_in_range_samples() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(500, 600); 8]);

    let batch = collect_samples(&mut reader, &settled_state(), 1_000).unwrap();

    assert_eq!(batch.len(), TOUCH_COUNT_TOTAL);
    assert!(batch.iter().all(|p| *p == TouchPoint::new(500, 600)));
    assert_eq!(reader.reads(SensorChannel::PositionX), 6);
    assert_eq!(reader.pending_samples(), 2);
}

#[test]
fn saturated_sample_stops_but_keeps_collected() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(500, 600), (510, 610), (520, 620), (3901, 600), (530, 630)]);

    let batch = collect_samples(&mut reader, &settled_state(), 1_000).unwrap();

    assert_eq!(batch.len(), 3);
    assert_eq!(batch[2], TouchPoint::new(520, 620));
    assert_eq!(reader.pending_samples(), 1);
}

#[test]
fn floor_sample_stops_collection() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(500, 600), (500, 79), (500, 600)]);

    let batch = collect_samples(&mut reader, &settled_state(), 1_000).unwrap();

    assert_eq!(batch.len(), 1);
}

#[test]
fn range_limits_are_inclusive() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(80, 3900), (3900, 80), (80, 80), (3900, 3900)]);
    reader.push_samples(&[(4000, 4000)]);

    let batch = collect_samples(&mut reader, &settled_state(), 1_000).unwrap();

    assert_eq!(batch.len(), 4);
}

#[test]
fn far_jump_inside_window_rejects_cycle() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(100, 100), (1000, 1000), (1000, 1000)]);
    let state = touched_at(500, 100, 100);

    let result = collect_samples(&mut reader, &state, 505);

    assert_eq!(result, Err(CycleError::Rejected(RejectReason::JitterSpike)));
    assert_eq!(reader.pending_samples(), 1);
}

#[test]
fn far_jump_after_window_is_accepted() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(1000, 1000); 6]);
    let state = touched_at(500, 100, 100);

    let batch = collect_samples(&mut reader, &state, 531).unwrap();

    assert_eq!(batch.len(), 6);
}

#[test]
fn jitter_window_edge_is_inclusive() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(1000, 1000); 6]);
    let state = touched_at(500, 100, 100);

    let result = collect_samples(&mut reader, &state, 530);

    assert_eq!(result, Err(CycleError::Rejected(RejectReason::JitterSpike)));
}

#[test]
fn jump_of_exactly_max_distance_is_accepted() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(900, 100); 6]);
    let state = touched_at(500, 100, 100);

    let batch = collect_samples(&mut reader, &state, 510).unwrap();

    assert_eq!(batch.len(), 6);
}

#[test]
fn sensor_failure_aborts_collection() {
    let mut reader = ScriptedReader::new();
    reader.push_samples(&[(500, 600); 6]);
    reader.fail_position_after(5);

    let result = collect_samples(&mut reader, &settled_state(), 1_000);

    assert_eq!(
        result,
        Err(CycleError::Sensor(SensorError::Bus(ScriptError::Injected)))
    );
}
