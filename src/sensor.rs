use core::fmt::Debug;

use embedded_hal::i2c::I2c;

use crate::{config::NS2009_DEFAULT_ADDR, error::SensorError};

const NS2009_READ_X_LOW_POWER_12BIT: u8 = 0xc0;
const NS2009_READ_Y_LOW_POWER_12BIT: u8 = 0xd0;
const NS2009_READ_Z1_LOW_POWER_12BIT: u8 = 0xe0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorChannel {
    Pressure,
    PositionX,
    PositionY,
}

impl SensorChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pressure => "z1",
            Self::PositionX => "x",
            Self::PositionY => "y",
        }
    }

    fn command(self) -> u8 {
        match self {
            Self::Pressure => NS2009_READ_Z1_LOW_POWER_12BIT,
            Self::PositionX => NS2009_READ_X_LOW_POWER_12BIT,
            Self::PositionY => NS2009_READ_Y_LOW_POWER_12BIT,
        }
    }
}

/// Source of raw 12-bit controller readings.
pub trait SensorReader {
    type Error: Debug;

    fn read(&mut self, channel: SensorChannel) -> Result<u16, SensorError<Self::Error>>;
}

/// Decodes a controller word: the top 12 bits carry the value, the low
/// nibble of the second byte must be zero.
pub fn decode_reading<E>(channel: SensorChannel, raw: [u8; 2]) -> Result<u16, SensorError<E>> {
    if raw[1] & 0x0f != 0 {
        return Err(SensorError::InvalidReading { channel, raw });
    }
    Ok(((raw[0] as u16) << 4) | ((raw[1] as u16) >> 4))
}

pub struct Ns2009<I2C> {
    i2c: I2C,
    addr: u8,
}

impl<I2C> Ns2009<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, NS2009_DEFAULT_ADDR)
    }

    pub fn with_address(i2c: I2C, addr: u8) -> Self {
        Self { i2c, addr }
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_word(&mut self, channel: SensorChannel) -> Result<[u8; 2], I2C::Error> {
        let mut raw = [0u8; 2];
        self.i2c
            .write_read(self.addr, &[channel.command()], &mut raw)?;
        Ok(raw)
    }
}

impl<I2C> SensorReader for Ns2009<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read(&mut self, channel: SensorChannel) -> Result<u16, SensorError<Self::Error>> {
        let raw = self.read_word(channel)?;
        decode_reading(channel, raw)
    }
}
