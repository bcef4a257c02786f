//! Entry stub and panic handler for the bare ARM9.

use core::{arch::global_asm, panic::PanicInfo};

use log::error;

use super::power;

// Supervisor mode with IRQ and FIQ masked, stack at the top of ARM9 RAM,
// .bss zeroed, then into Rust.
global_asm!(
    r#"
    .section .text.start, "ax"
    .global _start
    .type _start, %function
    .arm
_start:
    msr cpsr_c, #0xD3
    ldr sp, =__stack_top
    ldr r0, =__bss_start
    ldr r1, =__bss_end
    mov r2, #0
1:
    cmp r0, r1
    strlo r2, [r0], #4
    blo 1b
    bl firm_main
2:
    b 2b
"#
);

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    error!("panic: {}", info);
    power::halt()
}
