//! Power-management microcontroller on I2C bus 1.

use embedded_hal::i2c::I2c;
use hello_core::power::{PowerAction, PowerControl};
use log::info;

/// 7-bit bus address of the MCU.
pub const MCU_ADDRESS: u8 = 0x25;
/// Power control register.
pub const REG_POWER: u8 = 0x20;
/// Cuts power when written to [`REG_POWER`].
pub const POWER_OFF: u8 = 1 << 0;
/// Resets the system when written to [`REG_POWER`].
pub const REBOOT: u8 = 1 << 2;

/// Register-level MCU driver.
#[derive(Debug)]
pub struct Mcu<I2C> {
    i2c: I2C,
}

impl<I2C> Mcu<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(MCU_ADDRESS, &[reg, value])
    }

    pub fn read_register(&mut self, reg: u8) -> Result<u8, I2C::Error> {
        let mut value = [0u8];
        self.i2c.write_read(MCU_ADDRESS, &[reg], &mut value)?;
        Ok(value[0])
    }

    pub fn reboot(&mut self) -> Result<(), I2C::Error> {
        self.write_register(REG_POWER, REBOOT)
    }

    pub fn power_off(&mut self) -> Result<(), I2C::Error> {
        self.write_register(REG_POWER, POWER_OFF)
    }
}

impl<I2C> PowerControl for Mcu<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn request(&mut self, action: PowerAction) -> Result<(), Self::Error> {
        info!("mcu: requesting {:?}", action);
        match action {
            PowerAction::Reboot => self.reboot(),
            PowerAction::PowerOff => self.power_off(),
        }
    }
}
