use core::arch::asm;

use critical_section::RawRestoreState;

/// Masks IRQ and FIQ through CPSR; the ARM9 runs a single core.
struct CpsrCriticalSection;

critical_section::set_impl!(CpsrCriticalSection);

unsafe impl critical_section::Impl for CpsrCriticalSection {
    unsafe fn acquire() -> RawRestoreState {
        let cpsr: u32;
        unsafe {
            asm!(
                "mrs {cpsr}, cpsr",
                "orr {tmp}, {cpsr}, #0xC0",
                "msr cpsr_c, {tmp}",
                cpsr = out(reg) cpsr,
                tmp = out(reg) _,
                options(nostack, preserves_flags),
            );
        }
        cpsr
    }

    unsafe fn release(restore_state: RawRestoreState) {
        unsafe {
            asm!(
                "msr cpsr_c, {0}",
                in(reg) restore_state,
                options(nostack, preserves_flags),
            );
        }
    }
}
