//! Typewriter reveal.
use bevy_ecs::prelude::*;

use crate::resources::gamestate::GameState;
use crate::resources::worldtime::WorldTime;

/// Advance the dialog reveal counter by the frame delta.
pub fn dialog_reveal_system(time: Res<WorldTime>, mut state: ResMut<GameState>) {
    state.update(time.delta);
}
