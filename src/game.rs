//! Flow enter hooks.
//!
//! These one-shot systems are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the flow observer when the game enters the matching state.

use bevy_ecs::prelude::*;
use log::{error, info};
use std::path::Path;

use crate::resources::flow::{FlowStates, NextFlowState};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::texturestore::{DIALOG_TEXTURE, FONT_TEXTURE, TextureStore, background_key};

fn load_texture(
    rl: &mut raylib::RaylibHandle,
    th: &raylib::RaylibThread,
    store: &mut TextureStore,
    key: String,
    path: &Path,
) {
    let Some(path_str) = path.to_str() else {
        error!("Texture path is not valid UTF-8: {}", path.display());
        return;
    };
    match rl.load_texture(th, path_str) {
        Ok(texture) => {
            info!("Loaded texture '{}' from {}", key, path.display());
            store.insert(key, texture);
        }
        Err(e) => error!("Failed to load texture '{}' from {}: {}", key, path.display(), e),
    }
}

/// Load the background of every area plus the dialog box and glyph atlas,
/// then request [`FlowStates::Playing`].
///
/// A texture that fails to load is logged and simply not drawn.
pub fn setup(
    mut next_flow: ResMut<NextFlowState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    config: Res<GameConfig>,
    state: Res<GameState>,
) {
    let mut backgrounds: Vec<usize> = state
        .content()
        .areas()
        .iter()
        .map(|a| a.background)
        .collect();
    backgrounds.sort_unstable();
    backgrounds.dedup();

    for background in backgrounds {
        let key = background_key(background);
        let path = config.texture_path(&format!("{}.png", key));
        load_texture(&mut rl, &th, &mut textures, key, &path);
    }
    for key in [DIALOG_TEXTURE, FONT_TEXTURE] {
        let path = config.texture_path(&format!("{}.png", key));
        load_texture(&mut rl, &th, &mut textures, key.to_string(), &path);
    }

    info!("Setup done, {} textures loaded", textures.len());
    next_flow.set(FlowStates::Playing);
}

/// Announce the start of play.
pub fn enter_play(state: Res<GameState>) {
    info!(
        "Playing: {} areas, starting in area {} with {} dialog lines queued",
        state.content().len(),
        state.current_area_id().0,
        state.dialog().len()
    );
}
