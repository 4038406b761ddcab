//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence enables the debug overlay
//! - `dialog` – dialog queue and typewriter reveal counter
//! - `flow` – authoritative and pending high-level flow state
//! - `fontatlas` – glyph atlas layout and advance table
//! - `fullscreen` – presence marks fullscreen mode
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – narrative state: current area, keys, dialog
//! - `input` – per-frame state of the buttons the game uses
//! - `rendertarget` – fixed-resolution framebuffer
//! - `screensize` – render resolution, also the pointer reference size
//! - `systemsstore` – flow hooks addressable by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `windowsize` – actual window size and letterbox math
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod dialog;
pub mod flow;
pub mod fontatlas;
pub mod fullscreen;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rendertarget;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
