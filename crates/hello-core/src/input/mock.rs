use super::{ButtonSource, Buttons};

/// Replays a fixed list of button states, then reports exhaustion.
#[derive(Debug, Clone)]
pub struct ScriptedButtons<'a> {
    presses: &'a [Buttons],
    cursor: usize,
}

/// Returned once every scripted state has been consumed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScriptExhausted;

impl<'a> ScriptedButtons<'a> {
    pub const fn new(presses: &'a [Buttons]) -> Self {
        Self { presses, cursor: 0 }
    }

    /// Number of states handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl ButtonSource for ScriptedButtons<'_> {
    type Error = ScriptExhausted;

    fn wait_buttons(&mut self) -> Result<Buttons, Self::Error> {
        let Some(buttons) = self.presses.get(self.cursor).copied() else {
            return Err(ScriptExhausted);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(buttons)
    }
}
