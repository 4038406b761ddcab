//! Rendering.
//!
//! Everything is positioned in normalized device coordinates, the same space
//! the hotspots are authored in, and drawn into the fixed-resolution
//! [`RenderTarget`] which is then letterboxed into the window.
//!
//! Image placement follows a unit quad spanning `[-1, 1]` on both axes that is
//! scaled by `(x_scale, y_scale)` and moved to `(x, y)`, with y pointing up.
//! Hotspot regions use the pointer convention instead, with y pointing down.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::content::Region;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontatlas::{self, EM_ADVANCE};
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{DIALOG_TEXTURE, FONT_TEXTURE, TextureStore, background_key};
use crate::resources::windowsize::WindowSize;

/// Dialog box placement: bottom quarter of the screen.
const DIALOG_BOX: (f32, f32, f32, f32) = (-1.0, -0.75, 2.0, 0.25);
/// Dialog text origin and glyph scale.
const DIALOG_TEXT: (f32, f32, f32, f32) = (-0.9, -0.75, 0.025, 0.1);

/// Build a color from normalized RGBA components.
pub fn tint(r: f32, g: f32, b: f32, a: f32) -> Color {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(channel(r), channel(g), channel(b), channel(a))
}

/// Pixel rectangle covered by the unit quad moved to `(x, y)` and scaled by
/// `(x_scale, y_scale)`.
pub fn ndc_rect(x: f32, y: f32, x_scale: f32, y_scale: f32, screen: &ScreenSize) -> Rectangle {
    let (w, h) = screen.as_f32();
    Rectangle {
        x: (x - x_scale + 1.0) * 0.5 * w,
        y: (1.0 - (y + y_scale)) * 0.5 * h,
        width: x_scale * w,
        height: y_scale * h,
    }
}

/// Pixel rectangle of a hotspot region.
pub fn region_rect(region: &Region, screen: &ScreenSize) -> Rectangle {
    let (w, h) = screen.as_f32();
    Rectangle {
        x: (region.x - region.half_w + 1.0) * 0.5 * w,
        y: (region.y - region.half_h + 1.0) * 0.5 * h,
        width: region.half_w * w,
        height: region.half_h * h,
    }
}

/// Draw a whole texture into the quad at `(x, y)` scaled by `(x_scale, y_scale)`.
pub fn draw_image<D: RaylibDraw>(
    d: &mut D,
    texture: &Texture2D,
    color: Color,
    x: f32,
    y: f32,
    x_scale: f32,
    y_scale: f32,
    screen: &ScreenSize,
) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: texture.width as f32,
        height: texture.height as f32,
    };
    let dest = ndc_rect(x, y, x_scale, y_scale, screen);
    d.draw_texture_pro(texture, src, dest, Vector2::zero(), 0.0, color);
}

/// Draw the first `visible` characters of `text` from the glyph atlas.
///
/// Each glyph is a quad scaled like [`draw_image`]; the pen moves right by the
/// glyph advance over [`EM_ADVANCE`] times `x_scale`.
pub fn draw_text<D: RaylibDraw>(
    d: &mut D,
    atlas: &Texture2D,
    text: &str,
    color: Color,
    x: f32,
    y: f32,
    x_scale: f32,
    y_scale: f32,
    screen: &ScreenSize,
    visible: usize,
) {
    let (atlas_w, atlas_h) = (atlas.width as f32, atlas.height as f32);
    let mut pen = 0.0;
    for c in text.chars().take(visible) {
        if let Some(index) = fontatlas::glyph_index(c) {
            let src = fontatlas::glyph_rect(index, atlas_w, atlas_h);
            let dest = ndc_rect(x + pen / EM_ADVANCE * x_scale, y, x_scale, y_scale, screen);
            d.draw_texture_pro(atlas, src, dest, Vector2::zero(), 0.0, color);
        }
        pen += fontatlas::advance(c);
    }
}

fn draw_scene<D: RaylibDraw>(
    d: &mut D,
    state: &GameState,
    textures: &TextureStore,
    screen: &ScreenSize,
) {
    d.clear_background(Color::BLACK);

    if let Some(area) = state.current_area() {
        if let Some(background) = textures.get(background_key(area.background)) {
            draw_image(d, background, Color::WHITE, 0.0, 0.0, 1.0, 1.0, screen);
        }
    }

    let dialog = state.dialog();
    let Some(line) = dialog.current() else {
        return;
    };
    if let Some(frame) = textures.get(DIALOG_TEXTURE) {
        let (x, y, xs, ys) = DIALOG_BOX;
        draw_image(d, frame, Color::WHITE, x, y, xs, ys, screen);
    }
    if let Some(atlas) = textures.get(FONT_TEXTURE) {
        let (x, y, xs, ys) = DIALOG_TEXT;
        draw_text(
            d,
            atlas,
            line,
            tint(0.9, 0.8, 1.0, 1.0),
            x,
            y,
            xs,
            ys,
            screen,
            dialog.visible_chars(),
        );
    }
}

fn draw_debug_overlay<D: RaylibDraw>(
    d: &mut D,
    state: &GameState,
    input: &InputState,
    screen: &ScreenSize,
    fps: u32,
) {
    if let Some(area) = state.current_area() {
        for door in &area.doors {
            d.draw_rectangle_lines_ex(region_rect(&door.region, screen), 2.0, Color::RED);
        }
        for item in &area.interactables {
            d.draw_rectangle_lines_ex(region_rect(&item.region, screen), 2.0, Color::GREEN);
        }
    }

    let (w, h) = screen.as_f32();
    let lines = [
        format!("DEBUG MODE (F11 to toggle) | FPS: {}", fps),
        format!("Area: {}", state.current_area_id().0),
        format!("Keys: {:?}", state.keys_acquired()),
        format!(
            "Dialog: {} queued, reveal {:.1}",
            state.dialog().len(),
            state.dialog().reveal()
        ),
        format!(
            "Pointer: ({:.3}, {:.3})",
            2.0 * (input.pointer_position.x / w - 0.5),
            2.0 * (input.pointer_position.y / h - 0.5)
        ),
    ];
    for (i, text) in lines.iter().enumerate() {
        d.draw_text(text, 10, 10 + 20 * i as i32, 16, Color::YELLOW);
    }
}

/// Draw the current area and dialog into the render target, then scale the
/// target into the window.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    state: Res<GameState>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    window: Res<WindowSize>,
    debug: Option<Res<DebugMode>>,
) {
    let fps = rl.get_fps();
    {
        let mut t = rl.begin_texture_mode(&th, &mut target.texture);
        draw_scene(&mut t, &state, &textures, &screen);
        if debug.is_some() {
            draw_debug_overlay(&mut t, &state, &input, &screen, fps);
        }
    }

    let dest = window.calculate_letterbox(target.game_width, target.game_height);
    let src = target.source_rect();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(&target.texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn rect_eq(r: Rectangle, x: f32, y: f32, w: f32, h: f32) -> bool {
        (r.x - x).abs() < EPSILON
            && (r.y - y).abs() < EPSILON
            && (r.width - w).abs() < EPSILON
            && (r.height - h).abs() < EPSILON
    }

    #[test]
    fn unit_quad_fills_the_screen() {
        let screen = ScreenSize::new(1280, 720);
        assert!(rect_eq(ndc_rect(0.0, 0.0, 1.0, 1.0, &screen), 0.0, 0.0, 1280.0, 720.0));
    }

    #[test]
    fn dialog_box_covers_bottom_quarter() {
        let screen = ScreenSize::new(1280, 720);
        let (x, y, xs, ys) = DIALOG_BOX;
        let r = ndc_rect(x, y, xs, ys, &screen);
        // The quad overhangs the left edge; the visible part spans the width.
        assert!(rect_eq(r, -1280.0, 540.0, 2560.0, 180.0));
    }

    #[test]
    fn region_rect_uses_pointer_orientation() {
        let screen = ScreenSize::new(1280, 720);
        let r = region_rect(&Region::new(0.5, -0.5, 0.25, 0.25), &screen);
        assert!(rect_eq(r, 800.0, 90.0, 320.0, 180.0));
    }

    #[test]
    fn tint_converts_normalized_channels() {
        let c = tint(0.25, 0.8, 1.0, 1.0);
        assert_eq!((c.r, c.g, c.b, c.a), (64, 204, 255, 255));
        let clamped = tint(2.0, -1.0, 0.0, 0.5);
        assert_eq!((clamped.r, clamped.g, clamped.a), (255, 0, 128));
    }
}
