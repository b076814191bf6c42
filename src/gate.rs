use crate::{
    config::{TOUCH_PRESSURE_CONTACT_MIN, TOUCH_PRESSURE_SAMPLES},
    error::SensorError,
    sensor::{SensorChannel, SensorReader},
    types::PressureBatch,
};

/// Reads the full pressure batch; any failed read aborts the whole batch.
pub fn read_pressure_batch<R: SensorReader>(
    reader: &mut R,
) -> Result<PressureBatch, SensorError<R::Error>> {
    let mut batch = [0u16; TOUCH_PRESSURE_SAMPLES];
    for slot in &mut batch {
        *slot = reader.read(SensorChannel::Pressure)?;
    }
    Ok(batch)
}

/// Contact only counts when every reading clears the floor; one low sample
/// is enough to call the cycle idle.
pub fn contact_active(batch: &PressureBatch) -> bool {
    batch.iter().all(|&z1| z1 >= TOUCH_PRESSURE_CONTACT_MIN)
}
