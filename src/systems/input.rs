//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame, writes
//! the results into [`crate::resources::input::InputState`] and triggers the
//! events the rest of the game reacts to.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::pointer::PointerDownEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::{BoolState, InputBinding, InputState};
use crate::resources::screensize::ScreenSize;
use crate::resources::windowsize::WindowSize;

fn poll(state: &mut BoolState, rl: &raylib::RaylibHandle) {
    let (down, pressed) = match state.binding {
        InputBinding::Key(key) => (rl.is_key_down(key), rl.is_key_pressed(key)),
        InputBinding::Mouse(button) => (
            rl.is_mouse_button_down(button),
            rl.is_mouse_button_pressed(button),
        ),
        InputBinding::Unbound => (false, false),
    };
    state.active = down;
    state.just_pressed = pressed;
}

/// Poll Raylib for input and update the `InputState` resource.
///
/// The mouse position is mapped through the letterbox into render-target
/// pixels. The stored position is clamped to the frame; a press on the bars
/// sends no [`PointerDownEvent`].
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    window_size: Res<WindowSize>,
    screen_size: Res<ScreenSize>,
    mut commands: Commands,
) {
    poll(&mut input.pointer_primary, &rl);
    poll(&mut input.mode_debug, &rl);
    poll(&mut input.fullscreen_toggle, &rl);

    let mouse = rl.get_mouse_position();
    let (game_w, game_h) = (screen_size.w as u32, screen_size.h as u32);
    input.pointer_position = window_size.window_to_game_pos(mouse, game_w, game_h);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }
    if input.pointer_primary.just_pressed {
        // Presses on the letterbox bars are not clicks on the scene.
        match window_size.window_to_game_pos_checked(mouse, game_w, game_h) {
            Some(position) => commands.trigger(PointerDownEvent { position }),
            None => debug!("Pointer press outside the frame ignored"),
        }
    }
}
