//! The board's external I/O port bank, reached through the CPU's `IN` and
//! `OUT` instructions.
//!
//! Inputs 0-2 expose the control panel and the hardwired/DIP bits, input 3
//! reads the hardware shift register. Outputs drive the shift register,
//! the two sound banks (dropped) and the watchdog (dropped). Everything
//! here lives on the CPU thread; only the control panel handle is shared.

use crate::controls::ControlPanel;
use std::fmt;
use std::sync::Arc;

/// The dedicated 16-bit shift-register chip. `OUT 4` pushes a byte into the
/// high half (the previous high byte slides down), `OUT 2` sets the read
/// window offset, and `IN 3` reads eight bits starting at that offset.
#[derive(Debug, Default)]
struct ShiftRegister {
    contents: u16,
    offset: u8, // 3 bits
}

impl ShiftRegister {
    fn read(&self) -> u8 {
        (self.contents >> (8 - self.offset)) as u8
    }

    fn write_offset(&mut self, data: u8) {
        self.offset = data & 0x07;
    }

    fn write_contents(&mut self, data: u8) {
        self.contents = (self.contents >> 8) | ((data as u16) << 8);
    }
}

impl fmt::Display for ShiftRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shift register | contents: {:#06x} | offset: {} | read: {:#04x}",
            self.contents,
            self.offset,
            self.read()
        )
    }
}

/// The multiplexed port bank. Owns the shift register and borrows the
/// control panel for the input-port reads.
pub struct PortBank {
    shift: ShiftRegister,
    controls: Arc<ControlPanel>,
}

impl PortBank {
    pub fn new(controls: Arc<ControlPanel>) -> Self {
        PortBank {
            shift: ShiftRegister::default(),
            controls,
        }
    }

    /// Services an `IN` instruction. Unknown ports warn and read as 0.
    pub fn read_port(&self, port: u8) -> u8 {
        match port {
            0 => self.read_input0(),
            1 => self.read_input1(),
            2 => self.read_input2(),
            3 => self.shift.read(),
            _ => {
                log::warn!("attempted to read from unavailable input port {}", port);
                0
            }
        }
    }

    /// Services an `OUT` instruction. Unknown ports warn and drop the byte.
    pub fn write_port(&mut self, port: u8, data: u8) {
        match port {
            2 => self.shift.write_offset(data),
            3 => {} // sound bank 0: UFO/shot/death/invader-death/extended-play
            4 => self.shift.write_contents(data),
            5 => {} // sound bank 1: fleet movement 1-4, UFO hit
            6 => {} // watchdog
            _ => {
                log::warn!("attempted to write to unavailable output port {}", port);
            }
        }
    }

    /// Port 0 is unused by the game; bits 1-3 are hardwired high.
    fn read_input0(&self) -> u8 {
        0x0E
    }

    /// Port 1:
    ///   bit 0 = credit
    ///   bit 1 = 2P start
    ///   bit 2 = 1P start
    ///   bit 3 = always 1
    ///   bit 4 = 1P fire
    ///   bit 5 = 1P left
    ///   bit 6 = 1P right
    ///   bit 7 = not connected
    fn read_input1(&self) -> u8 {
        let controls = self.controls.snapshot();
        let mut status = 0x08;
        if controls.credit > 0 {
            status |= 0x01;
        }
        if controls.player2.start {
            status |= 0x02;
        }
        if controls.player1.start {
            status |= 0x04;
        }
        if controls.player1.fire {
            status |= 0x10;
        }
        if controls.player1.left {
            status |= 0x20;
        }
        if controls.player1.right {
            status |= 0x40;
        }
        status
    }

    /// Port 2:
    ///   bits 0-1 = DIP: ship count (read as 0: three ships)
    ///   bit 2 = tilt (not wired)
    ///   bit 3 = DIP: bonus ship threshold (read as 0)
    ///   bit 4 = 2P fire
    ///   bit 5 = 2P left
    ///   bit 6 = 2P right
    ///   bit 7 = DIP: coin info in demo screen (read as 0)
    fn read_input2(&self) -> u8 {
        let controls = self.controls.snapshot();
        let mut status = 0x00;
        if controls.player2.fire {
            status |= 0x10;
        }
        if controls.player2.left {
            status |= 0x20;
        }
        if controls.player2.right {
            status |= 0x40;
        }
        status
    }
}

impl fmt::Display for PortBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.shift.fmt(f)
    }
}
