//! Debug overlay toggle.
//!
//! While this resource exists the render system outlines every door and
//! interactable of the current area and prints the narrative state.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugMode {}
