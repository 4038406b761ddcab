//! Fixed-resolution render target.
//!
//! The whole frame is drawn into a texture at the render resolution, then
//! scaled into the window with letterboxing. This keeps normalized device
//! coordinates, hotspots and pixels in agreement whatever the window size.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Sampling used when the frame is scaled into the window.
pub const FRAME_FILTER: TextureFilter = TextureFilter::TEXTURE_FILTER_POINT;

/// Render texture at the game's internal resolution.
///
/// Non-send: the texture lives on the GPU and must stay on the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = load(rl, th, width, height)?;
        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Replace the render texture with one of a new resolution.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        self.texture = load(rl, th, width, height)?;
        self.game_width = width;
        self.game_height = height;
        Ok(())
    }

    /// Source rectangle covering the whole texture.
    ///
    /// The height is negative because render textures are stored upside down.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}

fn load(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    width: u32,
    height: u32,
) -> Result<RenderTexture2D, String> {
    let texture = rl
        .load_render_texture(th, width, height)
        .map_err(|e| format!("Failed to create render texture: {}", e))?;
    unsafe {
        ffi::SetTextureFilter(texture.texture, FRAME_FILTER as i32);
    }
    Ok(texture)
}
