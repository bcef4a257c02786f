#![cfg_attr(not(test), no_std)]

//! Hardware-independent core of the hello-firm entrypoint: font decoding,
//! text rendering, and the input-driven demo loop.

pub mod app;
pub mod font;
pub mod input;
pub mod power;
pub mod render;
