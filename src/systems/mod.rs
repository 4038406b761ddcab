//! Frame systems.
//!
//! Submodules overview
//! - [`dialog`] – advance the typewriter reveal by the frame delta
//! - [`flow`] – detect pending flow transitions; `Playing` run condition
//! - [`gameconfig`] – apply config changes to the window and render target
//! - [`input`] – read hardware input and trigger events
//! - [`render`] – draw the current area, dialog and debug overlay

pub mod dialog;
pub mod flow;
pub mod gameconfig;
pub mod input;
pub mod render;
