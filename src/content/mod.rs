//! Static content graph: areas, doors and interactables.
//!
//! The whole map is hand-authored and built once at startup. Areas live in an
//! arena ([`ContentGraph`]) and doors point at their destination through an
//! [`AreaId`] index, so cycles and self-loops need no special handling.
//!
//! Submodules:
//! - [`story`] – the shipped story and JSON loading/saving helpers

pub mod story;

use serde::{Deserialize, Serialize};

/// Stable index of an [`Area`] inside a [`ContentGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub usize);

/// Axis-aligned clickable rectangle in normalized device coordinates.
///
/// `(x, y)` is the center, `half_w`/`half_h` the half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            x,
            y,
            half_w,
            half_h,
        }
    }

    /// Point containment test. Both axes use open intervals, so a point lying
    /// exactly on the border is a miss.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let dx = self.x - px;
        let dy = self.y - py;
        dx > -self.half_w && dx < self.half_w && dy > -self.half_h && dy < self.half_h
    }
}

/// Clickable transition to another area, optionally gated by a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub region: Region,
    pub destination: AreaId,
    /// Key needed to pass. Empty means the door is unlocked.
    #[serde(default)]
    pub required_key: String,
    /// Lines queued when the player lacks `required_key`.
    #[serde(default)]
    pub fail_message: Vec<String>,
}

impl Door {
    pub fn new(region: Region, destination: AreaId) -> Self {
        Self {
            region,
            destination,
            required_key: String::new(),
            fail_message: Vec::new(),
        }
    }

    /// Gate the door behind `key`, showing `fail_message` when it is missing.
    pub fn locked(mut self, key: impl Into<String>, fail_message: &[&str]) -> Self {
        self.required_key = key.into();
        self.fail_message = fail_message.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn is_locked(&self) -> bool {
        !self.required_key.is_empty()
    }
}

/// Clickable object that grants keys the first time it is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactable {
    pub region: Region,
    #[serde(default)]
    pub keys_within: Vec<String>,
    #[serde(default)]
    pub discover_message: Vec<String>,
    #[serde(default)]
    pub seen_message: Vec<String>,
    #[serde(skip)]
    pub seen: bool,
}

impl Interactable {
    pub fn new(
        region: Region,
        keys_within: &[&str],
        discover_message: &[&str],
        seen_message: &[&str],
    ) -> Self {
        Self {
            region,
            keys_within: to_lines(keys_within),
            discover_message: to_lines(discover_message),
            seen_message: to_lines(seen_message),
            seen: false,
        }
    }
}

/// A navigable location drawn over one background image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Index of the background image (`scene{n + 1}.png`).
    pub background: usize,
    #[serde(default)]
    pub intro_message: Vec<String>,
    #[serde(default)]
    pub seen_message: Vec<String>,
    #[serde(default)]
    pub doors: Vec<Door>,
    #[serde(default)]
    pub interactables: Vec<Interactable>,
    #[serde(skip)]
    pub seen: bool,
}

impl Area {
    pub fn new(background: usize, intro_message: &[&str], seen_message: &[&str]) -> Self {
        Self {
            background,
            intro_message: to_lines(intro_message),
            seen_message: to_lines(seen_message),
            doors: Vec::new(),
            interactables: Vec::new(),
            seen: false,
        }
    }

    /// Find the first door whose region contains the point, in list order.
    pub fn door_at(&self, x: f32, y: f32) -> Option<usize> {
        self.doors.iter().position(|d| d.region.contains(x, y))
    }

    /// Find the first interactable whose region contains the point, in list order.
    pub fn interactable_at(&self, x: f32, y: f32) -> Option<usize> {
        self.interactables
            .iter()
            .position(|i| i.region.contains(x, y))
    }
}

/// Arena holding every area of the game for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGraph {
    areas: Vec<Area>,
}

impl ContentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area and return its id.
    pub fn add_area(&mut self, area: Area) -> AreaId {
        self.areas.push(area);
        AreaId(self.areas.len() - 1)
    }

    pub fn add_door(&mut self, from: AreaId, door: Door) {
        if let Some(area) = self.areas.get_mut(from.0) {
            area.doors.push(door);
        }
    }

    pub fn add_interactable(&mut self, at: AreaId, item: Interactable) {
        if let Some(area) = self.areas.get_mut(at.0) {
            area.interactables.push(item);
        }
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(id.0)
    }

    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.get_mut(id.0)
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn contains(&self, id: AreaId) -> bool {
        id.0 < self.areas.len()
    }

    /// Check that every door points at an existing area.
    pub fn validate(&self) -> Result<(), String> {
        for (a, area) in self.areas.iter().enumerate() {
            for (d, door) in area.doors.iter().enumerate() {
                if !self.contains(door.destination) {
                    return Err(format!(
                        "door {} of area {} leads to missing area {} ({} areas defined)",
                        d,
                        a,
                        door.destination.0,
                        self.areas.len()
                    ));
                }
            }
        }
        Ok(())
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
