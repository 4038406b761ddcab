//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies settings to the window,
//! render target and screen size resources.

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use bevy_ecs::prelude::*;
use log::{debug, error, info};
use raylib::ffi;

/// Apply render size, fullscreen, vsync and FPS whenever [`GameConfig`] is
/// added or modified.
///
/// `ScreenSize` only follows the config once the render target has been
/// recreated successfully, so pointer conversion never uses a size that is
/// not on screen.
pub fn apply_gameconfig_changes(
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    mut screen_size: ResMut<ScreenSize>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    if !config.is_changed() {
        return;
    }

    if render_target.game_width != config.render_width
        || render_target.game_height != config.render_height
    {
        info!(
            "Resizing render target: {}x{} -> {}x{}",
            render_target.game_width,
            render_target.game_height,
            config.render_width,
            config.render_height
        );
        match render_target.recreate(&mut rl, &th, config.render_width, config.render_height) {
            Ok(()) => {
                screen_size.w = config.render_width as i32;
                screen_size.h = config.render_height as i32;
            }
            Err(e) => error!("Failed to resize render target: {}", e),
        }
    }

    if config.fullscreen != fullscreen.is_some() {
        debug!(
            "Fullscreen mismatch: config={}, window={} - triggering toggle",
            config.fullscreen,
            fullscreen.is_some()
        );
        commands.trigger(SwitchFullScreenEvent {});
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    rl.set_target_fps(config.target_fps);

    info!(
        "GameConfig applied (vsync={}, fps={})",
        config.vsync, config.target_fps
    );
}
