//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the scene cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use WASD for primary
//! movement, arrow keys as an alternative, Space as the activation key and
//! Escape to quit.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
    /// Edge-triggered activation: attach an object, or release one.
    pub activate: BoolState,
    pub action_back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            secondarydirection_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            secondarydirection_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            secondarydirection_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            secondarydirection_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            activate: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}

impl InputState {
    /// Raw directional axes, each in [-1, 1] and not normalized together.
    /// `+x` is right, `+y` is up.
    pub fn axes(&self) -> Vector2 {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vector2 {
            x: axis(
                self.maindirection_left.active || self.secondarydirection_left.active,
                self.maindirection_right.active || self.secondarydirection_right.active,
            ),
            y: axis(
                self.maindirection_down.active || self.secondarydirection_down.active,
                self.maindirection_up.active || self.secondarydirection_up.active,
            ),
        }
    }

    /// True on the frame the activation key went down.
    pub fn activated(&self) -> bool {
        self.activate.just_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.maindirection_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.maindirection_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.maindirection_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.maindirection_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.secondarydirection_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.activate.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_axes_default_is_zero() {
        let input = InputState::default();
        let a = input.axes();
        assert_eq!((a.x, a.y), (0.0, 0.0));
        assert!(!input.activated());
    }

    #[test]
    fn test_axes_are_independent() {
        let mut input = InputState::default();
        input.maindirection_up.active = true;
        input.maindirection_right.active = true;
        let a = input.axes();
        // not normalized together
        assert_eq!((a.x, a.y), (1.0, 1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.maindirection_left.active = true;
        input.secondarydirection_right.active = true;
        input.secondarydirection_down.active = true;
        let a = input.axes();
        assert_eq!((a.x, a.y), (0.0, -1.0));
    }
}
