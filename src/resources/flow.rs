//! High-level game flow resources.
//!
//! These resources track the authoritative flow state of the game (setup,
//! playing) and any pending transition requested by systems. See
//! `crate::events::flow::observe_flow_change_event` for how a transition is
//! applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FlowStates {
    #[default]
    None,
    Setup,
    Playing,
}

/// Representation of a requested next state.
///
/// Use [`NextFlowState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextFlowStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextFlowStates {
    #[default]
    Unchanged,
    Pending(FlowStates),
}

/// Authoritative current flow state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FlowState {
    current: FlowStates,
}

impl FlowState {
    /// Create a new state initialized to [`FlowStates::None`].
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> &FlowStates {
        &self.current
    }
    /// Update the current state immediately, skipping enter hooks.
    pub fn set(&mut self, state: FlowStates) {
        self.current = state;
    }
}

/// Intent to change to a new flow state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextFlowState {
    next: NextFlowStates,
}

impl NextFlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextFlowStates {
        &self.next
    }

    /// Request a transition to `next`. The `check_pending_flow` system picks
    /// it up on the next frame.
    pub fn set(&mut self, next: FlowStates) {
        self.next = NextFlowStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextFlowStates::Unchanged;
    }
}
