//! Demo loop: moves a status string around in response to buttons.

use ctr_framebuffer::Color;
use log::{debug, info};

use crate::{
    font::GlyphFont,
    input::{ButtonSource, Buttons},
    power::PowerAction,
    render::{STD_COLOR_BG, STD_COLOR_FONT, ScreenId, Screens, draw_text},
};


const DISPLAY_TEXT: &str = "Hello FIRM Entrypoint!";
const START_X: usize = 10;
const START_Y: usize = 10;
const STEP: usize = 5;
const FAST_STEP: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DemoConfig {
    pub text: &'static str,
    pub start_x: usize,
    pub start_y: usize,
    pub step: usize,
    /// Step used while the left shoulder is held.
    pub fast_step: usize,
    pub fg: Color,
    pub bg: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            text: DISPLAY_TEXT,
            start_x: START_X,
            start_y: START_Y,
            step: STEP,
            fast_step: FAST_STEP,
            fg: STD_COLOR_FONT,
            bg: STD_COLOR_BG,
        }
    }
}

impl DemoConfig {
    pub const fn with_text(mut self, text: &'static str) -> Self {
        self.text = text;
        self
    }

    pub const fn with_start(mut self, x: usize, y: usize) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    pub const fn with_steps(mut self, step: usize, fast_step: usize) -> Self {
        self.step = step;
        self.fast_step = fast_step;
        self
    }
}

/// Where the text currently sits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor {
    pub screen: ScreenId,
    pub x: usize,
    pub y: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Running,
    Exiting(PowerAction),
}

pub struct DemoApp<IN>
where
    IN: ButtonSource,
{
    input: IN,
    config: DemoConfig,
    cursor: Cursor,
    state: RunState,
}

impl<IN> DemoApp<IN>
where
    IN: ButtonSource,
{
    pub fn new(input: IN, config: DemoConfig) -> Self {
        Self {
            input,
            config,
            cursor: Self::home(&config, ScreenId::Top),
            state: RunState::Running,
        }
    }

    fn home(config: &DemoConfig, screen: ScreenId) -> Cursor {
        Cursor {
            screen,
            x: config.start_x,
            y: config.start_y,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn into_input(self) -> IN {
        self.input
    }

    /// Applies one polled button state to the cursor.
    pub fn apply_buttons(&mut self, buttons: Buttons) -> RunState {
        if self.state != RunState::Running {
            return self.state;
        }

        if buttons.intersects(Buttons::B | Buttons::START) {
            self.state = RunState::Exiting(PowerAction::Reboot);
            return self.state;
        }
        if buttons.contains(Buttons::SELECT) {
            self.state = RunState::Exiting(PowerAction::PowerOff);
            return self.state;
        }

        let step = if buttons.contains(Buttons::L) {
            self.config.fast_step
        } else {
            self.config.step
        };

        if buttons.contains(Buttons::R) {
            self.cursor = Self::home(&self.config, self.cursor.screen.toggled());
        }

        let cursor = &mut self.cursor;
        if buttons.contains(Buttons::UP) {
            cursor.y = cursor.y.saturating_sub(step);
        } else if buttons.contains(Buttons::LEFT) {
            cursor.x = cursor.x.saturating_sub(step);
        } else if buttons.contains(Buttons::DOWN) {
            cursor.y = cursor.y.saturating_add(step);
        } else if buttons.contains(Buttons::RIGHT) {
            cursor.x = cursor.x.saturating_add(step);
        }

        self.state
    }

    fn draw_at(&self, screens: &mut Screens<'_>, font: &GlyphFont, at: Cursor, fg: Color) {
        draw_text(
            screens.get_mut(at.screen),
            font,
            self.config.text,
            at.x,
            at.y,
            fg,
            self.config.bg,
        );
    }

    /// Runs until an exit button is pressed and returns the requested action.
    ///
    /// Each poll erases the text at its old placement (when it moved) and
    /// draws it at the new one.
    pub fn run(
        &mut self,
        screens: &mut Screens<'_>,
        font: &GlyphFont,
    ) -> Result<PowerAction, IN::Error> {
        info!("demo: running at {:?}", self.cursor);

        loop {
            self.draw_at(screens, font, self.cursor, self.config.fg);

            let buttons = self.input.wait_buttons()?;
            let previous = self.cursor;

            if let RunState::Exiting(action) = self.apply_buttons(buttons) {
                info!("demo: exit requested ({:?})", action);
                return Ok(action);
            }

            if self.cursor != previous {
                debug!("demo: {:?} -> {:?}", previous, self.cursor);
                self.draw_at(screens, font, previous, self.config.bg);
            }
        }
    }
}
