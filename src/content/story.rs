//! The shipped story and helpers to read or write stories as JSON.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::{Area, AreaId, ContentGraph, Door, Interactable, Region};

/// Half extent shared by every clickable region of the shipped story.
const HOTSPOT: f32 = 0.3;

/// Everything needed to start a game: the content graph, where the player
/// starts, and the lines shown before the first click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub start: AreaId,
    #[serde(default)]
    pub opening: Vec<String>,
    pub areas: ContentGraph,
}

impl Story {
    /// Reject stories whose start area or door destinations do not exist.
    pub fn validate(&self) -> Result<(), String> {
        if !self.areas.contains(self.start) {
            return Err(format!(
                "start area {} does not exist ({} areas defined)",
                self.start.0,
                self.areas.len()
            ));
        }
        self.areas.validate()
    }

    /// Parse and validate a story from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let story: Story =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse story: {}", e))?;
        story.validate()?;
        Ok(story)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize story: {}", e))
    }

    /// Load a story from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read story {}: {}", path.display(), e))?;
        let story = Self::from_json(&json)?;
        info!(
            "Loaded story from {} ({} areas)",
            path.display(),
            story.areas.len()
        );
        Ok(story)
    }
}

fn hotspot(x: f32, y: f32) -> Region {
    Region::new(x, y, HOTSPOT, HOTSPOT)
}

/// Auriga the astronaut, lost in space.
pub fn default_story() -> Story {
    let mut graph = ContentGraph::new();

    let a0 = graph.add_area(Area::new(0, &[], &[]));
    let a1 = graph.add_area(Area::new(1, &[], &[]));
    let a2 = graph.add_area(Area::new(2, &[], &[]));
    let a3 = graph.add_area(Area::new(3, &[], &[]));

    graph.add_door(a0, Door::new(hotspot(0.63, -0.23), a1));
    graph.add_door(
        a0,
        Door::new(hotspot(-0.1, -0.8), a3)
            .locked("gravity-left", &["Hmm... this wall looks quite unclimable..."]),
    );

    graph.add_door(a1, Door::new(hotspot(-0.8, 0.0), a0));
    graph.add_door(a1, Door::new(hotspot(0.83, -0.47), a2));
    // Nothing ever grants "no": the antimatter stays out of reach.
    graph.add_door(
        a1,
        Door::new(hotspot(0.09, 0.58), a1).locked(
            "no",
            &["Yikes, that antimatter looks dangerous, better stay away!"],
        ),
    );

    graph.add_door(a2, Door::new(hotspot(-0.78, 0.69), a1));
    graph.add_door(
        a2,
        Door::new(hotspot(0.49, 0.19), a0).locked("gravity-left", &["This looks like a dangerous drop..."]),
    );
    graph.add_interactable(
        a2,
        Interactable::new(
            hotspot(0.30, -0.67),
            &["gravity-left"],
            &[
                "Auriga can now use left gravity!",
                "Perhaps this might give him a new perspective on drops and walls...",
            ],
            &["Auriga can now use gravity to climb walls!"],
        ),
    );

    graph.add_door(a3, Door::new(hotspot(0.0, -0.76), a0));
    graph.add_door(a3, Door::new(hotspot(0.11, 0.56), a0));

    Story {
        start: a0,
        opening: vec![
            "Auriga the astronaut is lost in space :(".to_string(),
            "Perhaps you can help him out! Click around to check things out!".to_string(),
        ],
        areas: graph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_story_is_valid() {
        let story = default_story();
        assert!(story.validate().is_ok());
        assert_eq!(story.areas.len(), 4);
        assert_eq!(story.start, AreaId(0));
        assert_eq!(story.opening.len(), 2);
    }

    #[test]
    fn default_story_backgrounds_follow_area_order() {
        let story = default_story();
        for (i, area) in story.areas.areas().iter().enumerate() {
            assert_eq!(area.background, i);
        }
    }

    #[test]
    fn wall_in_first_area_needs_gravity() {
        let story = default_story();
        let a0 = story.areas.area(AreaId(0)).unwrap();
        let wall = &a0.doors[1];
        assert_eq!(wall.required_key, "gravity-left");
        assert_eq!(wall.destination, AreaId(3));
        assert_eq!(
            wall.fail_message,
            vec!["Hmm... this wall looks quite unclimable...".to_string()]
        );
    }

    #[test]
    fn gravity_is_granted_in_third_area() {
        let story = default_story();
        let a2 = story.areas.area(AreaId(2)).unwrap();
        assert_eq!(a2.interactables.len(), 1);
        assert_eq!(a2.interactables[0].keys_within, vec!["gravity-left".to_string()]);
        assert_eq!(a2.interactables[0].discover_message.len(), 2);
    }

    #[test]
    fn story_json_preserves_content() {
        let story = default_story();
        let json = story.to_json().unwrap();
        let back = Story::from_json(&json).unwrap();
        assert_eq!(back, story);
    }

    #[test]
    fn from_json_rejects_missing_start() {
        let json = r#"{ "start": 3, "areas": [ { "background": 0 } ] }"#;
        let err = Story::from_json(json).unwrap_err();
        assert!(err.contains("start area 3"));
    }

    #[test]
    fn from_json_fills_defaults() {
        let json = r#"{
            "start": 0,
            "areas": [
                { "background": 0, "doors": [
                    { "region": { "x": 0.0, "y": 0.0, "half_w": 0.1, "half_h": 0.1 }, "destination": 0 }
                ] }
            ]
        }"#;
        let story = Story::from_json(json).unwrap();
        let door = &story.areas.area(AreaId(0)).unwrap().doors[0];
        assert!(!door.is_locked());
        assert!(door.fail_message.is_empty());
        assert!(story.opening.is_empty());
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = Story::from_json("{ not json").unwrap_err();
        assert!(err.starts_with("Failed to parse story"));
    }
}
