use core::hint::spin_loop;

use embedded_hal::i2c::I2c;
use hello_core::power::{PowerAction, PowerControl};
use hello_hal_ctr::platform::mcu::Mcu;
use log::error;

/// Asks the power MCU for `action` and parks the core.
///
/// The MCU cuts power or resets asynchronously, so the park loop is also the
/// fallback when the request never reaches it.
pub(super) fn shutdown<I2C>(mcu: &mut Mcu<I2C>, action: PowerAction) -> !
where
    I2C: I2c,
{
    if let Err(err) = mcu.request(action) {
        error!("power: {:?} failed: {:?}", action, err);
    }
    halt()
}

pub(super) fn halt() -> ! {
    loop {
        spin_loop();
    }
}
