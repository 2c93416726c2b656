//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`].
use bevy_ecs::prelude::*;

use crate::resources::input::{BoolState, InputState};

fn poll(rl: &raylib::RaylibHandle, state: &mut BoolState) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let input = &mut *input;
    // WASD keys
    poll(&rl, &mut input.maindirection_up);
    poll(&rl, &mut input.maindirection_left);
    poll(&rl, &mut input.maindirection_down);
    poll(&rl, &mut input.maindirection_right);
    // Arrow keys
    poll(&rl, &mut input.secondarydirection_up);
    poll(&rl, &mut input.secondarydirection_down);
    poll(&rl, &mut input.secondarydirection_left);
    poll(&rl, &mut input.secondarydirection_right);
    // Action keys
    poll(&rl, &mut input.activate);
    poll(&rl, &mut input.action_back);
}
