//! `log` backend that keeps the most recent records in RAM.
//!
//! The ARM9 has no console of its own, so records are only kept for
//! inspection from a debugger (`LOGGER` in the symbol table).

use core::{cell::RefCell, fmt::Write};

use critical_section::Mutex;
use hello_core::render::Truncating;
use heapless::{Deque, String};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept before the oldest is dropped.
pub const LOG_LINES: usize = 16;
/// Bytes kept per record; longer records are cut.
pub const LOG_LINE_BYTES: usize = 96;

pub type LogLine = String<LOG_LINE_BYTES>;

static LOGGER: RingLogger = RingLogger::new();

/// Bounded in-memory log sink.
pub struct RingLogger {
    lines: Mutex<RefCell<Deque<LogLine, LOG_LINES>>>,
}

impl Default for RingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RingLogger {
    pub const fn new() -> Self {
        Self {
            lines: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    fn push_line(&self, line: LogLine) {
        critical_section::with(|cs| {
            // A record emitted while the buffer is borrowed (panic mid-log) is dropped.
            let Ok(mut lines) = self.lines.borrow(cs).try_borrow_mut() else {
                return;
            };
            if lines.is_full() {
                lines.pop_front();
            }
            let _ = lines.push_back(line);
        });
    }

    /// Visits retained records, oldest first.
    pub fn for_each_line(&self, mut f: impl FnMut(&str)) {
        critical_section::with(|cs| {
            if let Ok(lines) = self.lines.borrow(cs).try_borrow() {
                for line in lines.iter() {
                    f(line);
                }
            }
        });
    }

    /// Drops every retained record.
    pub fn clear(&self) {
        critical_section::with(|cs| {
            if let Ok(mut lines) = self.lines.borrow(cs).try_borrow_mut() {
                lines.clear();
            }
        });
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    // The log macros have already filtered on the max level.
    fn log(&self, record: &Record<'_>) {
        let mut line = LogLine::new();
        let _ = write!(
            Truncating::new(&mut line),
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
        self.push_line(line);
    }

    fn flush(&self) {}
}

/// The global logger instance installed by [`init`].
pub fn logger() -> &'static RingLogger {
    &LOGGER
}

/// Installs the global ring logger.
///
/// Must run before anything logs; on targets without atomic CAS it is not
/// safe to call concurrently with logging.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    #[cfg(target_has_atomic = "ptr")]
    {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
    }
    #[cfg(not(target_has_atomic = "ptr"))]
    unsafe {
        log::set_logger_racy(&LOGGER)?;
        log::set_max_level_racy(level);
    }
    Ok(())
}
