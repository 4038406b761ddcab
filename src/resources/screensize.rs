//! Render resolution resource.
//!
//! Size of the fixed render target in pixels. It is also the reference
//! resolution for converting pointer positions into normalized device
//! coordinates, and for mapping those coordinates back to pixels when drawing.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn as_f32(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }
}
