//! Merges keyboard and on-screen touch input into one logical state.

use std::collections::HashSet;

use glam::Vec2;
use tidepool_engine::InputEvent;

use crate::tuning::{MOBILE_MAX_WIDTH, TOUCH_RADIUS, TOUCH_ROW_INSET};

/// DOM key codes the game listens to.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const W: u32 = 87;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    pub fn for_key(key_code: u32) -> Option<Self> {
        match key_code {
            keys::LEFT | keys::A => Some(Action::Left),
            keys::RIGHT | keys::D => Some(Action::Right),
            keys::UP | keys::W | keys::SPACE => Some(Action::Jump),
            _ => None,
        }
    }
}

/// Logical input: each flag is true while any bound source holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// A circular on-screen button, held by zero or more pointers.
#[derive(Debug, Clone)]
pub struct TouchControl {
    pub action: Action,
    pub center: Vec2,
    pub radius: f32,
    holders: HashSet<u32>,
}

impl TouchControl {
    fn new(action: Action, center: Vec2) -> Self {
        Self {
            action,
            center,
            radius: TOUCH_RADIUS,
            holders: HashSet::new(),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    pub fn is_held(&self) -> bool {
        !self.holders.is_empty()
    }
}

pub struct ControlResolver {
    held_keys: HashSet<u32>,
    touch: Vec<TouchControl>,
}

impl ControlResolver {
    /// Touch controls exist only when the viewport is narrower than 768px.
    /// They are laid out along the bottom of a `world`-sized canvas.
    pub fn new(viewport_width: f32, world: Vec2) -> Self {
        let touch = if viewport_width < MOBILE_MAX_WIDTH {
            let row = world.y - TOUCH_ROW_INSET;
            vec![
                TouchControl::new(Action::Left, Vec2::new(50.0, row)),
                TouchControl::new(Action::Right, Vec2::new(130.0, row)),
                TouchControl::new(Action::Jump, Vec2::new(world.x - 80.0, row)),
            ]
        } else {
            Vec::new()
        };
        Self {
            held_keys: HashSet::new(),
            touch,
        }
    }

    pub fn is_mobile(&self) -> bool {
        !self.touch.is_empty()
    }

    pub fn touch_controls(&self) -> &[TouchControl] {
        &self.touch
    }

    /// Fold one host event into the held sets. Replaying the same events
    /// yields the same state.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                if Action::for_key(key_code).is_some() {
                    self.held_keys.insert(key_code);
                }
            }
            InputEvent::KeyUp { key_code } => {
                self.held_keys.remove(&key_code);
            }
            InputEvent::PointerDown { id, x, y } => {
                let point = Vec2::new(x, y);
                for control in self.touch.iter_mut().filter(|c| c.contains(point)) {
                    control.holders.insert(id);
                }
            }
            InputEvent::PointerMove { id, x, y } => {
                let point = Vec2::new(x, y);
                for control in self.touch.iter_mut().filter(|c| !c.contains(point)) {
                    control.holders.remove(&id);
                }
            }
            InputEvent::PointerUp { id, .. } | InputEvent::PointerLeave { id } => {
                for control in &mut self.touch {
                    control.holders.remove(&id);
                }
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    fn holds(&self, action: Action) -> bool {
        self.held_keys
            .iter()
            .any(|&code| Action::for_key(code) == Some(action))
            || self.touch.iter().any(|c| c.action == action && c.is_held())
    }

    pub fn state(&self) -> InputState {
        InputState {
            left: self.holds(Action::Left),
            right: self.holds(Action::Right),
            jump: self.holds(Action::Jump),
        }
    }

    /// Release everything, e.g. when the session ends.
    pub fn reset(&mut self) {
        self.held_keys.clear();
        for control in &mut self.touch {
            control.holders.clear();
        }
    }

    /// Help line for the UI.
    pub fn hint(&self) -> &'static str {
        if self.is_mobile() {
            "Use touch controls below!"
        } else {
            "Arrow Keys / WASD to move • Space/Up to jump"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vec2 = Vec2::new(800.0, 500.0);

    fn desktop() -> ControlResolver {
        ControlResolver::new(1280.0, WORLD)
    }

    fn mobile() -> ControlResolver {
        ControlResolver::new(390.0, WORLD)
    }

    #[test]
    fn keys_map_to_actions() {
        let mut c = desktop();
        c.apply(&InputEvent::KeyDown { key_code: keys::A });
        c.apply(&InputEvent::KeyDown { key_code: keys::SPACE });
        assert_eq!(c.state(), InputState { left: true, right: false, jump: true });

        c.apply(&InputEvent::KeyDown { key_code: 81 });
        c.apply(&InputEvent::KeyUp { key_code: keys::A });
        assert_eq!(c.state(), InputState { left: false, right: false, jump: true });
    }

    #[test]
    fn flag_holds_while_any_source_holds_it() {
        let mut c = desktop();
        c.apply(&InputEvent::KeyDown { key_code: keys::RIGHT });
        c.apply(&InputEvent::KeyDown { key_code: keys::D });
        c.apply(&InputEvent::KeyUp { key_code: keys::RIGHT });
        assert!(c.state().right);
        c.apply(&InputEvent::KeyUp { key_code: keys::D });
        assert!(!c.state().right);
    }

    #[test]
    fn touch_layout_only_on_narrow_viewports() {
        assert!(!desktop().is_mobile());
        let c = mobile();
        let centers: Vec<Vec2> = c.touch_controls().iter().map(|t| t.center).collect();
        assert_eq!(
            centers,
            vec![Vec2::new(50.0, 420.0), Vec2::new(130.0, 420.0), Vec2::new(720.0, 420.0)]
        );
        assert_eq!(c.hint(), "Use touch controls below!");
    }

    #[test]
    fn touch_press_and_release() {
        let mut c = mobile();
        c.apply(&InputEvent::PointerDown { id: 1, x: 55.0, y: 425.0 });
        assert!(c.state().left);
        c.apply(&InputEvent::PointerUp { id: 1, x: 55.0, y: 425.0 });
        assert!(!c.state().left);

        c.apply(&InputEvent::PointerDown { id: 2, x: 400.0, y: 250.0 });
        assert_eq!(c.state(), InputState::default());
    }

    #[test]
    fn sliding_off_a_control_releases_it() {
        let mut c = mobile();
        c.apply(&InputEvent::PointerDown { id: 1, x: 720.0, y: 420.0 });
        c.apply(&InputEvent::PointerMove { id: 1, x: 725.0, y: 415.0 });
        assert!(c.state().jump);
        c.apply(&InputEvent::PointerMove { id: 1, x: 640.0, y: 420.0 });
        assert!(!c.state().jump);
    }

    #[test]
    fn each_pointer_releases_only_its_own_press() {
        let mut c = mobile();
        c.apply(&InputEvent::PointerDown { id: 1, x: 130.0, y: 420.0 });
        c.apply(&InputEvent::PointerDown { id: 2, x: 720.0, y: 420.0 });
        c.apply(&InputEvent::PointerLeave { id: 2 });
        assert_eq!(c.state(), InputState { left: false, right: true, jump: false });
    }

    #[test]
    fn replaying_events_is_stable() {
        let events = [
            InputEvent::KeyDown { key_code: keys::LEFT },
            InputEvent::KeyUp { key_code: keys::LEFT },
            InputEvent::KeyDown { key_code: keys::UP },
        ];
        let mut c = desktop();
        c.apply_all(&events);
        let once = c.state();
        c.apply_all(&events);
        assert_eq!(c.state(), once);
        assert_eq!(once, InputState { left: false, right: false, jump: true });
    }

    #[test]
    fn reset_releases_everything() {
        let mut c = mobile();
        c.apply(&InputEvent::KeyDown { key_code: keys::W });
        c.apply(&InputEvent::PointerDown { id: 0, x: 50.0, y: 420.0 });
        c.reset();
        assert_eq!(c.state(), InputState::default());
    }
}
