//! Fullscreen marker.
//!
//! Present while the window is in fullscreen mode, so config changes can be
//! compared against the actual window state.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct FullScreen {}
