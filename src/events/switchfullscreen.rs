//! Fullscreen toggle event and observer.
//!
//! Pressing **F10** triggers [`SwitchFullScreenEvent`], which is handled by
//! [`switch_fullscreen_observer`]. The [`FullScreen`] marker resource tracks
//! the current mode so config changes can be reconciled with the window.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info};
use raylib::ffi;

/// Event triggered to toggle fullscreen mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

/// Size of the monitor the window is currently on.
fn current_monitor_size() -> (i32, i32) {
    unsafe {
        let monitor = ffi::GetCurrentMonitor();
        (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor))
    }
}

/// Observer that toggles fullscreen mode.
///
/// Leaving fullscreen restores the window size from [`GameConfig`]; entering
/// it first resizes the window to the current monitor.
pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    config: Res<GameConfig>,
) {
    let enable = fullscreen.is_none();
    if enable {
        commands.insert_resource(FullScreen {});
    } else {
        commands.remove_resource::<FullScreen>();
    }

    if rl.is_window_fullscreen() != enable {
        let (w, h) = if enable {
            current_monitor_size()
        } else {
            let (w, h) = config.window_size();
            (w as i32, h as i32)
        };
        debug!("Window size for {} mode: {}x{}", mode_name(enable), w, h);
        if enable {
            rl.set_window_size(w, h);
            rl.toggle_fullscreen();
        } else {
            rl.toggle_fullscreen();
            rl.set_window_size(w, h);
            rl.restore_window();
        }
    }

    if rl.is_window_fullscreen() == enable {
        info!("Switched to {} mode", mode_name(enable));
    } else {
        error!("Could not switch to {} mode", mode_name(enable));
    }
}

fn mode_name(fullscreen: bool) -> &'static str {
    if fullscreen { "fullscreen" } else { "windowed" }
}
