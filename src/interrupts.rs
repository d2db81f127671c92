//! The video-driven interrupt latch.
//!
//! The display front-end latches HBLANK at mid-frame and VBLANK at
//! end-of-frame; the driver loop drains the latch between instructions and
//! stages the corresponding `RST` on the CPU. Requests and the INTE enable
//! bit sit behind separate mutexes, and no operation ever holds both.

use std::sync::{Mutex, MutexGuard};

/// Opcode staged for a pending HBLANK: `RST 1`, vectoring to 0x0008.
const HBLANK_OPCODE: u8 = 0xCF;
/// Opcode staged for a pending VBLANK: `RST 2`, vectoring to 0x0010.
const VBLANK_OPCODE: u8 = 0xD7;

#[derive(Debug, Default)]
struct Requests {
    hblank: bool,
    vblank: bool,
}

/// Latched interrupt requests plus the INTE enable bit, shared between the
/// display thread (writer) and the CPU thread (reader/clearer).
#[derive(Debug)]
pub struct Interrupts {
    requests: Mutex<Requests>,
    inte: Mutex<bool>,
}

impl Interrupts {
    /// Interrupts start enabled, as on the real board at power-up.
    pub fn new() -> Self {
        Interrupts {
            requests: Mutex::new(Requests::default()),
            inte: Mutex::new(true),
        }
    }

    fn lock_requests(&self) -> MutexGuard<'_, Requests> {
        self.requests.lock().unwrap_or_else(|poisoned| {
            log::warn!("interrupt request lock poisoned; continuing");
            poisoned.into_inner()
        })
    }

    fn lock_inte(&self) -> MutexGuard<'_, bool> {
        self.inte.lock().unwrap_or_else(|poisoned| {
            log::warn!("INTE lock poisoned; continuing");
            poisoned.into_inner()
        })
    }

    /// Latches a mid-frame interrupt request. No-op while INTE is clear.
    pub fn trigger_hblank(&self) {
        if !self.enabled() {
            return;
        }
        self.lock_requests().hblank = true;
    }

    /// Latches an end-of-frame interrupt request. No-op while INTE is clear.
    pub fn trigger_vblank(&self) {
        if !self.enabled() {
            return;
        }
        self.lock_requests().vblank = true;
    }

    pub fn interrupt_waiting(&self) -> bool {
        let requests = self.lock_requests();
        requests.hblank || requests.vblank
    }

    /// Writes the three-byte instruction for the highest-priority pending
    /// request into `dest`. HBLANK wins when both are latched.
    pub fn load_interrupt_instruction(&self, dest: &mut [u8; 3]) {
        let requests = self.lock_requests();
        let mut instruction = [0x00u8; 3];
        if requests.hblank {
            instruction[0] = HBLANK_OPCODE;
        } else if requests.vblank {
            instruction[0] = VBLANK_OPCODE;
        }
        *dest = instruction;
    }

    pub fn clear_interrupts(&self) {
        let mut requests = self.lock_requests();
        requests.hblank = false;
        requests.vblank = false;
    }

    pub fn enable_interrupts(&self) {
        *self.lock_inte() = true;
    }

    pub fn disable_interrupts(&self) {
        *self.lock_inte() = false;
    }

    pub fn enabled(&self) -> bool {
        *self.lock_inte()
    }
}

impl Default for Interrupts {
    fn default() -> Self {
        Self::new()
    }
}
