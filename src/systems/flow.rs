use crate::events::flow::FlowChangedEvent;
use crate::resources::flow::{FlowState, FlowStates, NextFlowState, NextFlowStates};
use bevy_ecs::prelude::*;

/// Fire [`FlowChangedEvent`] when a transition has been requested.
pub fn check_pending_flow(mut commands: Commands, next_flow: Res<NextFlowState>) {
    if let NextFlowStates::Pending(_) = next_flow.get() {
        commands.trigger(FlowChangedEvent {});
    }
}

/// Run condition: true while the game is in [`FlowStates::Playing`].
pub fn state_is_playing(state: Res<FlowState>) -> bool {
    matches!(state.get(), FlowStates::Playing)
}
