//! Event types and observers.
//!
//! Events decouple the input system from the code that reacts to it.
//!
//! Submodules:
//! - [`flow`] – apply pending flow transitions and run enter hooks
//! - [`pointer`] – dispatch pointer presses to the narrative state
//! - [`switchdebug`] – toggle the debug overlay
//! - [`switchfullscreen`] – toggle fullscreen mode
pub mod flow;
pub mod pointer;
pub mod switchdebug;
pub mod switchfullscreen;
