//! Minimal Direct3D 11 repro for CVE-2023-31320.
//!
//! Builds a swap chain, render target, vertex buffer and input layout, then
//! draws a triangle with no vertex or pixel shader bound. On affected AMD
//! drivers the draw takes the display driver down with it.

pub mod config;
pub mod console;
pub mod error;
pub mod gate;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod pipeline;
pub mod repro;
pub mod shader;
pub mod trigger;

#[cfg(windows)]
pub mod dx11;
#[cfg(windows)]
pub mod window;

pub use {
    config::ReproConfig,
    console::Console,
    error::{ReproError, ReproResult, ResultCode, Stage},
    repro::{Outcome, Repro},
};
