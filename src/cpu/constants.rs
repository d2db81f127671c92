use std::time::Duration;

// --- Clock ---
pub const CYCLES_PER_SECOND: u64 = 2_000_000;
/// Wall-clock length of one CPU cycle at 2 MHz (500 ns).
pub const CYCLE_TIME: Duration = Duration::from_nanos(1_000_000_000 / CYCLES_PER_SECOND);

// --- Cycle counts the step loop needs outside the instruction table ---
pub const HALTED_CYCLES: u8 = 4; // a halted CPU idles at NOP cost
pub const SKIPPED_CALL_CYCLES: u8 = 11; // conditional call, condition false
pub const SKIPPED_RETURN_CYCLES: u8 = 5; // conditional return, condition false

// --- PSW flag byte layout ---
// Bit 1 reads as 1, bits 3 and 5 read as 0.
pub const PSW_CY: u8 = 0x01;
pub const PSW_ALWAYS_SET: u8 = 0x02;
pub const PSW_P: u8 = 0x04;
pub const PSW_AC: u8 = 0x10;
pub const PSW_Z: u8 = 0x40;
pub const PSW_S: u8 = 0x80;
