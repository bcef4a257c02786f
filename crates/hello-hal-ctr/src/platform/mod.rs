pub mod framebuffers;
pub mod i2c;
pub mod mcu;

pub(crate) mod mmio {
    /// # Safety
    ///
    /// `addr` must be a readable, suitably aligned device register.
    #[inline(always)]
    pub(crate) unsafe fn read<T: Copy>(addr: usize) -> T {
        unsafe { core::ptr::read_volatile(addr as *const T) }
    }

    /// # Safety
    ///
    /// `addr` must be a writable, suitably aligned device register.
    #[inline(always)]
    pub(crate) unsafe fn write<T: Copy>(addr: usize, value: T) {
        unsafe { core::ptr::write_volatile(addr as *mut T, value) }
    }
}
