//! Auriga library.
//!
//! Exposes the content graph, ECS resources, systems and events for use by the
//! executable and by integration tests.

pub mod content;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
