#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
#[path = "main/power.rs"]
mod power;
#[cfg(target_os = "none")]
#[path = "main/start.rs"]
mod start;

#[cfg(target_os = "none")]
mod firmware {
    use hello_core::{
        app::{DemoApp, DemoConfig},
        font::GlyphFont,
        power::PowerAction,
        render::ScreenId,
    };
    use hello_hal_ctr::{
        input::hid::HidButtons,
        logger,
        platform::{
            framebuffers::{self, FramebufferTable},
            i2c::I2cBus,
            mcu::Mcu,
        },
    };
    use log::{LevelFilter, error, info, warn};
    use static_cell::StaticCell;

    use super::power;

    const FONT_PBM: &[u8] = include_bytes!("../../assets/font.pbm");
    const LOG_X: usize = 10;
    const LOG_Y: usize = 10;

    static FONT: StaticCell<GlyphFont> = StaticCell::new();

    #[unsafe(no_mangle)]
    extern "C" fn firm_main() -> ! {
        if let Err(err) = logger::init(LevelFilter::Info) {
            // Another logger is already installed; records keep going there.
            warn!("boot: ring logger not installed: {}", err);
        }
        info!("boot: hello-firm {}", env!("CARGO_PKG_VERSION"));

        let mut mcu = Mcu::new(unsafe { I2cBus::bus1() });

        let table = unsafe { FramebufferTable::read() };
        let Some(mut screens) = (unsafe { framebuffers::take_screens(table) }) else {
            error!("boot: no usable framebuffers in {:?}", table);
            power::shutdown(&mut mcu, PowerAction::PowerOff);
        };
        screens.clear(true, true);

        let font: &'static GlyphFont = match GlyphFont::from_pbm(FONT_PBM) {
            Ok(font) => FONT.init(font),
            Err(err) => {
                error!("boot: bundled font rejected: {}", err);
                power::shutdown(&mut mcu, PowerAction::PowerOff);
            }
        };
        info!("boot: font {}x{}", font.width(), font.height());

        let step = font.line_height();
        screens.draw_line_fmt(
            font,
            LOG_X,
            LOG_Y,
            ScreenId::Bottom,
            format_args!("hello-firm {}", env!("CARGO_PKG_VERSION")),
        );
        screens.draw_line_fmt(
            font,
            LOG_X,
            LOG_Y + step,
            ScreenId::Bottom,
            format_args!("font {}x{}", font.width(), font.height()),
        );
        screens.draw_line_fmt(
            font,
            LOG_X,
            LOG_Y + 2 * step,
            ScreenId::Bottom,
            format_args!("B/START: reboot  SELECT: power off"),
        );

        let mut app = DemoApp::new(unsafe { HidButtons::mmio() }, DemoConfig::default());
        let Ok(action) = app.run(&mut screens, font);

        power::shutdown(&mut mcu, action)
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("hello-firm is an ARM9 payload; build it with --target armv5te-none-eabi");
}
