#![cfg_attr(not(test), no_std)]

//! Framebuffer primitives for the dual-screen handheld's 24-bit BGR panels.

mod color;
mod framebuffer;
pub mod geometry;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use color::Color;
pub use framebuffer::FrameBuffer;
