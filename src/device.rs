use crate::{
    config::{
        NS2009_DEVICE_NAME, NS2009_DEVICE_PHYS, NS2009_X_FUZZ, NS2009_Y_FUZZ, TOUCH_RAW_MAX,
    },
    types::TouchPoint,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsAxis {
    pub min: u16,
    pub max: u16,
    pub fuzz: u16,
    pub flat: u16,
}

/// Capabilities a host input layer should register for this controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: &'static str,
    pub phys: &'static str,
    pub abs_x: AbsAxis,
    pub abs_y: AbsAxis,
    pub touch_button: bool,
}

pub const NS2009_DEVICE: DeviceInfo = DeviceInfo {
    name: NS2009_DEVICE_NAME,
    phys: NS2009_DEVICE_PHYS,
    abs_x: AbsAxis {
        min: 0,
        max: TOUCH_RAW_MAX,
        fuzz: NS2009_X_FUZZ,
        flat: 0,
    },
    abs_y: AbsAxis {
        min: 0,
        max: TOUCH_RAW_MAX,
        fuzz: NS2009_Y_FUZZ,
        flat: 0,
    },
    touch_button: true,
};

/// Board mounting options. Applied to reported positions only; the
/// filter itself always works in controller orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchscreenProperties {
    pub swap_x_y: bool,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl TouchscreenProperties {
    pub fn is_identity(&self) -> bool {
        !(self.swap_x_y || self.invert_x || self.invert_y)
    }

    pub fn apply(&self, device: &DeviceInfo, point: TouchPoint) -> TouchPoint {
        let (mut x, mut y) = (point.x, point.y);
        if self.invert_x {
            x = mirror(device.abs_x, x);
        }
        if self.invert_y {
            y = mirror(device.abs_y, y);
        }
        if self.swap_x_y {
            core::mem::swap(&mut x, &mut y);
        }
        TouchPoint::new(x, y)
    }
}

fn mirror(axis: AbsAxis, value: u16) -> u16 {
    let value = value.clamp(axis.min, axis.max);
    axis.max - (value - axis.min)
}
