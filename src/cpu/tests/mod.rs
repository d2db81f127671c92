//! 8080 CPU tests, organized into:
//! - instructions.rs: individual instructions and instruction families
//! - interrupts.rs: interrupt staging, HLT wake-up, EI/DI
//!
//! Flag vectors follow the Intel 8080 Assembly Language Programming Manual.

use super::*;
use crate::controls::ControlPanel;
use crate::interrupts::Interrupts;
use crate::memory::Memory;
use crate::ports::PortBank;
use std::sync::Arc;

mod instructions;

// ========== Test Helpers ==========

fn machine() -> (Cpu, Memory, PortBank, Interrupts) {
    (
        Cpu::new(),
        Memory::new(),
        PortBank::new(Arc::new(ControlPanel::new())),
        Interrupts::new(),
    )
}

/// Loads `program` at `addr`, points PC at it, and executes a single
/// instruction, returning its cycle count.
fn run_one(
    cpu: &mut Cpu,
    mem: &mut Memory,
    ports: &mut PortBank,
    interrupts: &Interrupts,
    program: &[u8],
    addr: u16,
) -> u32 {
    load_program(mem, program, addr);
    cpu.pc = addr;
    cpu.step(mem, ports, interrupts).expect("instruction failed")
}

/// Writes `program` into memory starting at `addr`.
fn load_program(mem: &mut Memory, program: &[u8], addr: u16) {
    for (i, byte) in program.iter().enumerate() {
        mem.write_byte(addr.wrapping_add(i as u16), *byte);
    }
}

/// Executes instructions until `count` have run, with the program already in
/// memory at PC.
fn run_many(
    cpu: &mut Cpu,
    mem: &mut Memory,
    ports: &mut PortBank,
    interrupts: &Interrupts,
    count: usize,
) {
    for _ in 0..count {
        cpu.step(mem, ports, interrupts).expect("instruction failed");
    }
}
