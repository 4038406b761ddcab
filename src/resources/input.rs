//! Per-frame input resource.
//!
//! Captures the few buttons the game reacts to and exposes them to systems via
//! the [`InputState`] resource. The left mouse button drives all gameplay;
//! F11 toggles the debug overlay and F10 toggles fullscreen.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Physical control a [`BoolState`] is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBinding {
    Key(KeyboardKey),
    Mouse(MouseButton),
    Unbound,
}

#[derive(Debug, Clone, Copy)]
/// Boolean button state with an associated binding.
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was pressed this frame.
    pub just_pressed: bool,

    pub binding: InputBinding,
}

impl BoolState {
    pub fn bound_to(binding: InputBinding) -> Self {
        Self {
            binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            binding: InputBinding::Unbound,
        }
    }
}

/// Resource capturing the per-frame input relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub pointer_primary: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    /// Last pointer position in render-target pixels.
    pub pointer_position: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_primary: BoolState::bound_to(InputBinding::Mouse(
                MouseButton::MOUSE_BUTTON_LEFT,
            )),
            mode_debug: BoolState::bound_to(InputBinding::Key(KeyboardKey::KEY_F11)),
            fullscreen_toggle: BoolState::bound_to(InputBinding::Key(KeyboardKey::KEY_F10)),
            pointer_position: Vector2::zero(),
        }
    }
}
