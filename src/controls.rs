use sdl2::keyboard::Keycode;
use std::sync::{Mutex, MutexGuard};

/// The buttons available to a single player.
/// True = pressed, false = released.
#[derive(Clone, Debug, Default)]
pub struct PlayerControls {
    pub start: bool,
    pub fire: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything on the cabinet's control panel: the coin switch and both
/// player blocks.
#[derive(Clone, Debug, Default)]
pub struct GameControls {
    pub credit: u8,
    pub player1: PlayerControls,
    pub player2: PlayerControls,
}

/// Shared control-panel state. Written by the keyboard front-end, read
/// (never written) by input ports 1 and 2 on the CPU thread; one mutex
/// covers the whole bit-packed state.
#[derive(Debug, Default)]
pub struct ControlPanel {
    state: Mutex<GameControls>,
}

impl ControlPanel {
    pub fn new() -> Self {
        ControlPanel {
            state: Mutex::new(GameControls::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameControls> {
        self.state.lock().unwrap_or_else(|poisoned| {
            log::warn!("control panel lock poisoned; continuing");
            poisoned.into_inner()
        })
    }

    /// A copy of the current state, taken under the lock. Port reads work
    /// from this snapshot so the panel is held for as little time as
    /// possible.
    pub fn snapshot(&self) -> GameControls {
        self.lock().clone()
    }

    /// Handles a key press event.
    pub fn key_down(&self, key: Keycode) {
        self.apply(key, true);
    }

    /// Handles a key release event.
    pub fn key_up(&self, key: Keycode) {
        self.apply(key, false);
    }

    fn apply(&self, key: Keycode, pressed: bool) {
        let mut state = self.lock();
        match key {
            Keycode::C => state.credit = pressed as u8,
            Keycode::Return => state.player1.start = pressed,
            Keycode::Space => state.player1.fire = pressed,
            Keycode::Left => state.player1.left = pressed,
            Keycode::Right => state.player1.right = pressed,
            Keycode::KpEnter => state.player2.start = pressed,
            Keycode::Kp0 => state.player2.fire = pressed,
            Keycode::Kp4 => state.player2.left = pressed,
            Keycode::Kp6 => state.player2.right = pressed,
            _ => {} // Ignore other keys
        }
    }
}
