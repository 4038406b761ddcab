//! Narrative game state.
//!
//! [`GameState`] is the single owner of everything that changes while the
//! player clicks around: the content graph (for its `seen` flags), the current
//! area, the acquired keys and the dialog queue. It is inserted as an ECS
//! resource and only mutated by the pointer observer and the dialog system,
//! which never run concurrently.

use bevy_ecs::prelude::Resource;
use log::{debug, info};

use crate::content::story::Story;
use crate::content::{Area, AreaId, ContentGraph};
use crate::resources::dialog::{DialogAdvance, DialogQueue};

/// Convert a pixel coordinate to normalized device coordinates in `[-1, 1]`.
///
/// No axis is flipped: the top/left edge maps to `-1`.
pub fn to_ndc(pixel: f32, reference: f32) -> f32 {
    2.0 * (pixel / reference - 0.5)
}

#[derive(Resource, Debug, Clone)]
pub struct GameState {
    content: ContentGraph,
    current_area: AreaId,
    /// Append-only; the same key may appear more than once.
    keys_acquired: Vec<String>,
    dialog: DialogQueue,
}

impl GameState {
    /// Start a new game: queue the opening lines, then visit the start area.
    pub fn new(story: Story) -> Self {
        let mut state = Self {
            content: story.areas,
            current_area: story.start,
            keys_acquired: Vec::new(),
            dialog: DialogQueue::new(),
        };
        state.dialog.push_lines(story.opening);
        state.visit(story.start);
        state
    }

    pub fn content(&self) -> &ContentGraph {
        &self.content
    }

    pub fn current_area_id(&self) -> AreaId {
        self.current_area
    }

    pub fn current_area(&self) -> Option<&Area> {
        self.content.area(self.current_area)
    }

    pub fn keys_acquired(&self) -> &[String] {
        &self.keys_acquired
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.keys_acquired.iter().any(|k| k == key)
    }

    pub fn dialog(&self) -> &DialogQueue {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut DialogQueue {
        &mut self.dialog
    }

    /// Queue the intro message on the first visit of `id`, the seen message
    /// afterwards.
    pub fn visit(&mut self, id: AreaId) {
        let Some(area) = self.content.area_mut(id) else {
            return;
        };
        if area.seen {
            self.dialog.push_lines(area.seen_message.iter().cloned());
        } else {
            self.dialog.push_lines(area.intro_message.iter().cloned());
            area.seen = true;
        }
    }

    /// Try to pass through door `door` of area `area`.
    ///
    /// A locked door without its key only queues the failure message. A
    /// successful traversal always queues the destination's intro message,
    /// whether or not it was visited before.
    pub fn interact_door(&mut self, area: AreaId, door: usize) {
        let Some(door) = self.content.area(area).and_then(|a| a.doors.get(door)) else {
            return;
        };

        if door.is_locked() && !self.has_key(&door.required_key) {
            debug!("Door needs key '{}'", door.required_key);
            self.dialog.push_lines(door.fail_message.iter().cloned());
            return;
        }

        let destination = door.destination;
        let Some(dest) = self.content.area(destination) else {
            return;
        };
        info!("Moving from area {} to area {}", area.0, destination.0);
        self.dialog.push_lines(dest.intro_message.iter().cloned());
        self.current_area = destination;
    }

    /// Use interactable `item` of area `area`. Keys are granted only once.
    pub fn interact_item(&mut self, area: AreaId, item: usize) {
        let Some(item) = self
            .content
            .area_mut(area)
            .and_then(|a| a.interactables.get_mut(item))
        else {
            return;
        };

        if item.seen {
            self.dialog.push_lines(item.seen_message.iter().cloned());
        } else {
            self.dialog.push_lines(item.discover_message.iter().cloned());
            info!("Acquired keys: {:?}", item.keys_within);
            self.keys_acquired.extend(item.keys_within.iter().cloned());
            item.seen = true;
        }
    }

    /// Per-frame update: advance the typewriter reveal.
    pub fn update(&mut self, elapsed: f32) {
        self.dialog.tick(elapsed);
    }

    /// Handle a pointer press at `(x, y)` in normalized device coordinates.
    ///
    /// An active dialog swallows the click. Otherwise doors are tested before
    /// interactables, each in list order, and the first hit is used. Every
    /// press counts as handled.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.dialog.is_active() {
            let outcome = self.dialog.advance();
            debug!("Dialog click: {:?}", outcome);
            if outcome == DialogAdvance::Dismissed && !self.dialog.is_active() {
                debug!("Dialog finished");
            }
            return true;
        }

        let id = self.current_area;
        let Some(area) = self.content.area(id) else {
            return true;
        };

        if let Some(door) = area.door_at(x, y) {
            self.interact_door(id, door);
        } else if let Some(item) = area.interactable_at(x, y) {
            self.interact_item(id, item);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::story::default_story;
    use crate::content::{Door, Interactable, Region};

    fn region(x: f32, y: f32) -> Region {
        Region::new(x, y, 0.2, 0.2)
    }

    /// a0 has a locked door to a1 at (0.5, 0.5) and an item at (-0.5, -0.5).
    fn small_story() -> Story {
        let mut graph = ContentGraph::new();
        let a0 = graph.add_area(Area::new(0, &["start"], &["back at start"]));
        let a1 = graph.add_area(Area::new(1, &["a1 intro"], &["a1 again"]));
        graph.add_door(a0, Door::new(region(0.5, 0.5), a1).locked("gravity-left", &["wall"]));
        graph.add_interactable(
            a0,
            Interactable::new(region(-0.5, -0.5), &["gravity-left"], &["found it"], &["old news"]),
        );
        graph.add_door(a1, Door::new(region(0.0, 0.0), a0));
        Story {
            start: a0,
            opening: Vec::new(),
            areas: graph,
        }
    }

    fn drain(state: &mut GameState) -> Vec<String> {
        let lines = state.dialog().lines().map(String::from).collect();
        while state.dialog().is_active() {
            state.dialog_mut().tick(100.0);
            state.dialog_mut().advance();
        }
        lines
    }

    #[test]
    fn new_queues_opening_then_start_intro() {
        let mut story = small_story();
        story.opening = vec!["hello".into()];
        let mut state = GameState::new(story);
        assert_eq!(drain(&mut state), vec!["hello", "start"]);
        assert!(state.current_area().unwrap().seen);
    }

    #[test]
    fn visit_uses_seen_message_on_revisit() {
        let mut state = GameState::new(small_story());
        drain(&mut state);
        state.visit(AreaId(0));
        assert_eq!(drain(&mut state), vec!["back at start"]);
    }

    #[test]
    fn locked_door_only_queues_failure() {
        let mut state = GameState::new(small_story());
        drain(&mut state);

        state.interact_door(AreaId(0), 0);
        assert_eq!(state.current_area_id(), AreaId(0));
        assert_eq!(drain(&mut state), vec!["wall"]);

        state.interact_door(AreaId(0), 0);
        assert_eq!(state.current_area_id(), AreaId(0));
        assert_eq!(drain(&mut state), vec!["wall"]);
    }

    #[test]
    fn unlocked_door_moves_and_queues_intro() {
        let mut state = GameState::new(small_story());
        drain(&mut state);
        state.interact_item(AreaId(0), 0);
        drain(&mut state);

        state.interact_door(AreaId(0), 0);
        assert_eq!(state.current_area_id(), AreaId(1));
        assert_eq!(drain(&mut state), vec!["a1 intro"]);
    }

    #[test]
    fn traversal_always_queues_intro_even_when_seen() {
        let mut state = GameState::new(small_story());
        drain(&mut state);
        state.interact_item(AreaId(0), 0);
        state.interact_door(AreaId(0), 0);
        drain(&mut state);

        state.interact_door(AreaId(1), 0);
        assert_eq!(state.current_area_id(), AreaId(0));
        assert_eq!(drain(&mut state), vec!["start"]);
    }

    #[test]
    fn self_loop_door_requeues_intro_and_stays() {
        let mut graph = ContentGraph::new();
        let a0 = graph.add_area(Area::new(0, &["loop intro"], &["loop seen"]));
        graph.add_door(a0, Door::new(region(0.0, 0.0), a0));
        let mut state = GameState::new(Story {
            start: a0,
            opening: Vec::new(),
            areas: graph,
        });
        assert_eq!(drain(&mut state), vec!["loop intro"]);
        assert!(state.current_area().unwrap().seen);

        for _ in 0..2 {
            assert!(state.pointer_down(0.0, 0.0));
            assert_eq!(state.current_area_id(), a0);
            assert_eq!(drain(&mut state), vec!["loop intro"]);
        }
    }

    #[test]
    fn interactable_grants_keys_once() {
        let mut graph = ContentGraph::new();
        let a0 = graph.add_area(Area::new(0, &[], &[]));
        graph.add_interactable(
            a0,
            Interactable::new(region(0.0, 0.0), &["k1", "k2"], &["disc"], &["seen"]),
        );
        let mut state = GameState::new(Story {
            start: a0,
            opening: Vec::new(),
            areas: graph,
        });

        state.interact_item(a0, 0);
        assert_eq!(state.keys_acquired(), &["k1".to_string(), "k2".to_string()]);
        assert_eq!(drain(&mut state), vec!["disc"]);

        for _ in 0..3 {
            state.interact_item(a0, 0);
            assert_eq!(drain(&mut state), vec!["seen"]);
        }
        assert_eq!(state.keys_acquired().len(), 2);
    }

    #[test]
    fn same_key_from_two_items_is_kept_twice() {
        let mut graph = ContentGraph::new();
        let a0 = graph.add_area(Area::new(0, &[], &[]));
        graph.add_interactable(a0, Interactable::new(region(0.0, 0.0), &["k"], &[], &[]));
        graph.add_interactable(a0, Interactable::new(region(0.5, 0.5), &["k"], &[], &[]));
        let mut state = GameState::new(Story {
            start: a0,
            opening: Vec::new(),
            areas: graph,
        });
        state.interact_item(a0, 0);
        state.interact_item(a0, 1);
        assert_eq!(state.keys_acquired(), &["k".to_string(), "k".to_string()]);
    }

    #[test]
    fn pointer_down_with_dialog_never_hit_tests() {
        let mut story = small_story();
        story.opening = vec!["Hello".into()];
        let mut state = GameState::new(story);
        // "Hello" then "start" are queued; clicking on the item must not pick it up.
        assert!(state.pointer_down(-0.5, -0.5));
        assert_eq!(state.dialog().reveal(), 5.0);
        assert!(state.pointer_down(-0.5, -0.5));
        assert_eq!(state.dialog().current(), Some("start"));
        assert!(state.keys_acquired().is_empty());
    }

    #[test]
    fn pointer_down_prefers_doors_over_items() {
        let mut graph = ContentGraph::new();
        let a0 = graph.add_area(Area::new(0, &[], &[]));
        let a1 = graph.add_area(Area::new(1, &["through"], &[]));
        graph.add_interactable(a0, Interactable::new(region(0.0, 0.0), &["k"], &["item"], &[]));
        graph.add_door(a0, Door::new(region(0.1, 0.0), a1));
        let mut state = GameState::new(Story {
            start: a0,
            opening: Vec::new(),
            areas: graph,
        });

        assert!(state.pointer_down(0.05, 0.0));
        assert_eq!(state.current_area_id(), a1);
        assert!(state.keys_acquired().is_empty());
    }

    #[test]
    fn pointer_down_on_nothing_changes_nothing() {
        let mut state = GameState::new(small_story());
        drain(&mut state);
        assert!(state.pointer_down(0.95, -0.95));
        assert_eq!(state.current_area_id(), AreaId(0));
        assert!(!state.dialog().is_active());
        assert!(state.keys_acquired().is_empty());
    }

    #[test]
    fn update_resets_reveal_once_queue_is_empty() {
        let mut state = GameState::new(small_story());
        state.update(0.1);
        assert!(state.dialog().reveal() > 0.0);
        drain(&mut state);
        state.update(0.1);
        assert_eq!(state.dialog().reveal(), 0.0);
    }

    #[test]
    fn default_story_gravity_walkthrough() {
        let mut state = GameState::new(default_story());
        drain(&mut state);

        // Locked wall in the first area.
        state.pointer_down(-0.1, -0.8);
        assert_eq!(state.current_area_id(), AreaId(0));
        assert_eq!(drain(&mut state), vec!["Hmm... this wall looks quite unclimable..."]);

        // a0 -> a1 -> a2, pick up gravity.
        state.pointer_down(0.63, -0.23);
        assert_eq!(state.current_area_id(), AreaId(1));
        state.pointer_down(0.83, -0.47);
        assert_eq!(state.current_area_id(), AreaId(2));
        state.pointer_down(0.30, -0.67);
        assert!(state.has_key("gravity-left"));
        assert_eq!(drain(&mut state).len(), 2);

        // Drop back into a0 and climb the wall.
        state.pointer_down(0.49, 0.19);
        assert_eq!(state.current_area_id(), AreaId(0));
        state.pointer_down(-0.1, -0.8);
        assert_eq!(state.current_area_id(), AreaId(3));
    }

    #[test]
    fn antimatter_door_stays_closed() {
        let mut state = GameState::new(default_story());
        drain(&mut state);
        state.pointer_down(0.63, -0.23);
        state.pointer_down(0.09, 0.58);
        assert_eq!(state.current_area_id(), AreaId(1));
        assert_eq!(
            drain(&mut state),
            vec!["Yikes, that antimatter looks dangerous, better stay away!"]
        );
    }

    #[test]
    fn to_ndc_maps_edges_and_center() {
        assert_eq!(to_ndc(0.0, 1280.0), -1.0);
        assert_eq!(to_ndc(640.0, 1280.0), 0.0);
        assert_eq!(to_ndc(1280.0, 1280.0), 1.0);
        assert_eq!(to_ndc(180.0, 720.0), -0.5);
    }
}
