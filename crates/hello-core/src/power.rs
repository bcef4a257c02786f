//! Power-state requests handed to the platform once the app exits.

/// What the platform should do after the main loop ends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PowerAction {
    Reboot,
    PowerOff,
}

/// Platform capability that reboots or powers the device off.
pub trait PowerControl {
    type Error;

    /// Asks the platform to carry out `action`.
    ///
    /// On hardware a successful request does not come back in practice; the
    /// caller parks the CPU afterwards.
    fn request(&mut self, action: PowerAction) -> Result<(), Self::Error>;
}
