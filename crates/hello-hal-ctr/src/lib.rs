#![cfg_attr(not(test), no_std)]

//! Board support for the ARM9 side of the dual-screen handheld: I2C, the
//! power-management MCU, HID buttons, boot framebuffers, and logging.

pub mod input;
pub mod logger;
pub mod platform;

#[cfg(all(target_os = "none", target_arch = "arm"))]
mod critical_section_impl;
