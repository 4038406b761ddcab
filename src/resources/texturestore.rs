//! Texture store.
//!
//! Loaded textures keyed by string IDs: `"scene1"`..`"sceneN"` for area
//! backgrounds, `"dialog"` for the dialog box and `"font"` for the glyph
//! atlas.
//!
//! Non-send resource: raylib textures must only be touched from the main
//! thread. Use `NonSend<TextureStore>` in system parameters.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub const DIALOG_TEXTURE: &str = "dialog";
pub const FONT_TEXTURE: &str = "font";

/// Texture key of the background image with the given index.
pub fn background_key(background: usize) -> String {
    format!("scene{}", background + 1)
}

#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_keys_are_one_based() {
        assert_eq!(background_key(0), "scene1");
        assert_eq!(background_key(3), "scene4");
    }
}
