//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! render resolution. Updated every frame so resizes are picked up.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

#[derive(Resource, Debug, Clone, Copy)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Uniform scale that fits a `game_width` x `game_height` frame in the window.
    fn fit_scale(&self, game_width: u32, game_height: u32) -> f32 {
        let sx = self.w as f32 / game_width as f32;
        let sy = self.h as f32 / game_height as f32;
        sx.min(sy)
    }

    /// Destination rectangle of the render target inside the window.
    ///
    /// Keeps the aspect ratio and centers the frame; the leftover space becomes
    /// bars on the sides or at the top and bottom.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let scale = self.fit_scale(game_width, game_height);
        let width = game_width as f32 * scale;
        let height = game_height as f32 * scale;
        Rectangle {
            x: (self.w as f32 - width) * 0.5,
            y: (self.h as f32 - height) * 0.5,
            width,
            height,
        }
    }

    /// Window-space position in render-target pixels, unclamped.
    fn to_frame(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let frame = self.calculate_letterbox(game_width, game_height);
        let scale = self.fit_scale(game_width, game_height);
        Vector2 {
            x: (window_pos.x - frame.x) / scale,
            y: (window_pos.y - frame.y) / scale,
        }
    }

    /// Map a window-space position to render-target pixels.
    ///
    /// Positions on the bars are clamped to the nearest edge of the frame.
    pub fn window_to_game_pos(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let p = self.to_frame(window_pos, game_width, game_height);
        Vector2 {
            x: p.x.clamp(0.0, game_width as f32),
            y: p.y.clamp(0.0, game_height as f32),
        }
    }

    /// Like [`window_to_game_pos`](Self::window_to_game_pos), but `None` when
    /// the position is on a bar outside the frame.
    pub fn window_to_game_pos_checked(
        &self,
        window_pos: Vector2,
        game_width: u32,
        game_height: u32,
    ) -> Option<Vector2> {
        let p = self.to_frame(window_pos, game_width, game_height);
        let inside = (0.0..=game_width as f32).contains(&p.x)
            && (0.0..=game_height as f32).contains(&p.y);
        inside.then_some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn same_size_window_is_identity() {
        let window = WindowSize { w: 1280, h: 720 };
        let rect = window.calculate_letterbox(1280, 720);
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (0.0, 0.0, 1280.0, 720.0));
        let p = window.window_to_game_pos(Vector2::new(100.0, 200.0), 1280, 720);
        assert!((p.x - 100.0).abs() < EPSILON);
        assert!((p.y - 200.0).abs() < EPSILON);
    }

    #[test]
    fn wide_window_is_pillarboxed() {
        let window = WindowSize { w: 1920, h: 720 };
        let rect = window.calculate_letterbox(1280, 720);
        assert!((rect.x - 320.0).abs() < EPSILON);
        assert!((rect.width - 1280.0).abs() < EPSILON);
        let p = window.window_to_game_pos(Vector2::new(320.0, 360.0), 1280, 720);
        assert!(p.x.abs() < EPSILON);
        assert!((p.y - 360.0).abs() < EPSILON);
    }

    #[test]
    fn tall_window_is_letterboxed_and_scaled() {
        let window = WindowSize { w: 640, h: 720 };
        let rect = window.calculate_letterbox(1280, 720);
        assert!((rect.height - 360.0).abs() < EPSILON);
        assert!((rect.y - 180.0).abs() < EPSILON);
        let p = window.window_to_game_pos(Vector2::new(320.0, 360.0), 1280, 720);
        assert!((p.x - 640.0).abs() < EPSILON);
        assert!((p.y - 360.0).abs() < EPSILON);
    }

    #[test]
    fn positions_on_bars_are_clamped() {
        let window = WindowSize { w: 640, h: 720 };
        let p = window.window_to_game_pos(Vector2::new(10.0, 5.0), 1280, 720);
        assert_eq!(p.y, 0.0);
        let p = window.window_to_game_pos(Vector2::new(10.0, 715.0), 1280, 720);
        assert_eq!(p.y, 720.0);
    }

    #[test]
    fn checked_mapping_rejects_bars() {
        // 1280x1000 window around a 1280x720 frame: 140 px bars top and bottom.
        let window = WindowSize { w: 1280, h: 1000 };
        assert!(window.window_to_game_pos_checked(Vector2::new(576.0, 10.0), 1280, 720).is_none());
        assert!(window.window_to_game_pos_checked(Vector2::new(576.0, 990.0), 1280, 720).is_none());

        let p = window
            .window_to_game_pos_checked(Vector2::new(576.0, 500.0), 1280, 720)
            .unwrap();
        assert!((p.x - 576.0).abs() < EPSILON);
        assert!((p.y - 360.0).abs() < EPSILON);

        // The clamped variant still snaps onto the edge for display.
        let clamped = window.window_to_game_pos(Vector2::new(576.0, 10.0), 1280, 720);
        assert_eq!(clamped.y, 0.0);
    }
}
