//! Framebuffers handed over by the boot loader.

use core::slice;

use ctr_framebuffer::{
    FrameBuffer,
    geometry::{BOTTOM_BUFFER_SIZE, BOTTOM_WIDTH, TOP_BUFFER_SIZE, TOP_WIDTH},
};
use hello_core::render::Screens;

use super::mmio;

/// Where the boot loader publishes framebuffer addresses
/// (top-left, top-right, bottom).
pub const FRAMEBUFFER_TABLE: usize = 0x23FF_FE00;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FramebufferTable {
    pub top_left: usize,
    pub top_right: usize,
    pub bottom: usize,
}

impl FramebufferTable {
    /// Reads the table published by the boot loader.
    ///
    /// # Safety
    ///
    /// Only valid on hardware, after a boot loader that fills the table.
    pub unsafe fn read() -> Self {
        unsafe {
            Self {
                top_left: mmio::read::<u32>(FRAMEBUFFER_TABLE) as usize,
                top_right: mmio::read::<u32>(FRAMEBUFFER_TABLE + 4) as usize,
                bottom: mmio::read::<u32>(FRAMEBUFFER_TABLE + 8) as usize,
            }
        }
    }
}

/// Borrows the left-eye top panel and the bottom panel for the rest of the program.
///
/// # Safety
///
/// `table` must describe live, non-overlapping framebuffers, and this must be
/// called at most once.
pub unsafe fn take_screens(table: FramebufferTable) -> Option<Screens<'static>> {
    if table.top_left == 0 || table.bottom == 0 {
        return None;
    }

    let top = unsafe { slice::from_raw_parts_mut(table.top_left as *mut u8, TOP_BUFFER_SIZE) };
    let bottom = unsafe { slice::from_raw_parts_mut(table.bottom as *mut u8, BOTTOM_BUFFER_SIZE) };

    Some(Screens::new(
        FrameBuffer::new(top, TOP_WIDTH)?,
        FrameBuffer::new(bottom, BOTTOM_WIDTH)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_table_entries_are_refused() {
        let table = FramebufferTable {
            top_left: 0,
            top_right: 0,
            bottom: 0,
        };
        assert!(unsafe { take_screens(table) }.is_none());
    }

    #[test]
    fn table_entries_map_to_panels() {
        let top: &'static mut [u8] = Box::leak(vec![0u8; TOP_BUFFER_SIZE].into_boxed_slice());
        let bottom: &'static mut [u8] = Box::leak(vec![0u8; BOTTOM_BUFFER_SIZE].into_boxed_slice());
        let table = FramebufferTable {
            top_left: top.as_mut_ptr() as usize,
            top_right: 0,
            bottom: bottom.as_mut_ptr() as usize,
        };

        let screens = unsafe { take_screens(table) }.unwrap();
        assert_eq!(screens.get(hello_core::render::ScreenId::Top).width(), TOP_WIDTH);
        assert_eq!(screens.get(hello_core::render::ScreenId::Bottom).width(), BOTTOM_WIDTH);
    }
}
