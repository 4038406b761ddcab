//! Flow transition event and observer.
//!
//! Systems request a change to the high-level [`FlowStates`] by updating
//! [`NextFlowState`]. Emitting a [`FlowChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`FlowState`]
//! and invokes the enter system stored in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::flow::NextFlowStates::{Pending, Unchanged};
use crate::resources::flow::{FlowState, FlowStates, NextFlowState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending flow transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlowChangedEvent {}

/// Observer that applies a pending flow transition.
///
/// Contract
/// - Reads the intention from [`NextFlowState`].
/// - If pending, copies the new value into [`FlowState`], resets the request
///   and runs the enter hook of the new state.
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// Enter hooks are looked up in [`SystemsStore`] under `"setup"` and
/// `"enter_play"`.
pub fn observe_flow_change_event(
    _trigger: On<FlowChangedEvent>,
    mut commands: Commands,
    mut next_flow: Option<ResMut<NextFlowState>>,
    mut flow: Option<ResMut<FlowState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("FlowChangedEvent triggered");

    let (Some(next_flow), Some(flow)) = (next_flow.as_deref_mut(), flow.as_deref_mut()) else {
        warn!(
            "One or more resources missing in observe_flow_change_event. next_flow: {:?}, flow: {:?}",
            next_flow.is_some(),
            flow.is_some()
        );
        return;
    };

    match next_flow.get().clone() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", flow.get(), new_state);
            flow.set(new_state.clone());
            next_flow.reset();
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => debug!("No flow change pending."),
    }
}

fn on_state_enter(state: &FlowStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        FlowStates::None => {
            debug!("Entered None state");
            return;
        }
        FlowStates::Setup => "setup",
        FlowStates::Playing => "enter_play",
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' system registered in SystemsStore", hook),
    }
}
