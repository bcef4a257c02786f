//! Button polling through the HID pad register.

use core::convert::Infallible;

use hello_core::input::{ButtonSource, Buttons};

use crate::platform::mmio;

/// Pad state register; a cleared bit means the button is held.
pub const REG_HID_PAD: usize = 0x1014_6000;

/// Raw pad register access.
pub trait PadRegister {
    fn read_raw(&mut self) -> u16;
}

#[derive(Debug)]
pub struct MmioPad;

impl PadRegister for MmioPad {
    fn read_raw(&mut self) -> u16 {
        unsafe { mmio::read(REG_HID_PAD) }
    }
}

/// Converts the active-low register value into a pressed set.
pub const fn pressed_from_raw(raw: u16) -> Buttons {
    Buttons::from_bits(!(raw as u32))
}

/// Blocking button source over the pad register.
#[derive(Debug)]
pub struct HidButtons<P = MmioPad> {
    pad: P,
}

impl HidButtons<MmioPad> {
    /// # Safety
    ///
    /// Only valid on hardware where the pad register is mapped.
    pub const unsafe fn mmio() -> Self {
        Self { pad: MmioPad }
    }
}

impl<P> HidButtons<P>
where
    P: PadRegister,
{
    pub fn new(pad: P) -> Self {
        Self { pad }
    }

    /// Current pressed set without waiting.
    pub fn pressed(&mut self) -> Buttons {
        pressed_from_raw(self.pad.read_raw())
    }
}

impl<P> ButtonSource for HidButtons<P>
where
    P: PadRegister,
{
    type Error = Infallible;

    fn wait_buttons(&mut self) -> Result<Buttons, Self::Error> {
        let before = self.pad.read_raw();
        loop {
            let now = self.pad.read_raw();
            if now != before {
                return Ok(pressed_from_raw(now));
            }
        }
    }
}
