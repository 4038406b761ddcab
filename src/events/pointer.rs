//! Pointer press event and the observer that dispatches it to the game.
//!
//! The input system triggers a [`PointerDownEvent`] for every press of the
//! primary pointer button. [`pointer_down_observer`] converts the position to
//! normalized device coordinates using the fixed render resolution and hands
//! it to [`GameState::pointer_down`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::resources::flow::{FlowState, FlowStates};
use crate::resources::gamestate::{GameState, to_ndc};
use crate::resources::screensize::ScreenSize;

/// Primary pointer button pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerDownEvent {
    /// Position in render-target pixels, origin at the top-left corner.
    pub position: Vector2,
}

/// Convert a render-target pixel position to normalized device coordinates.
pub fn pointer_to_ndc(position: Vector2, screen: &ScreenSize) -> (f32, f32) {
    (
        to_ndc(position.x, screen.w as f32),
        to_ndc(position.y, screen.h as f32),
    )
}

/// Dispatch a pointer press to the narrative state while playing.
pub fn pointer_down_observer(
    trigger: On<PointerDownEvent>,
    flow: Res<FlowState>,
    screen: Res<ScreenSize>,
    mut state: ResMut<GameState>,
) {
    if !matches!(flow.get(), FlowStates::Playing) {
        return;
    }
    let (x, y) = pointer_to_ndc(trigger.event().position, &screen);
    debug!("Pointer down at ({:.3}, {:.3})", x, y);
    state.pointer_down(x, y);
}
