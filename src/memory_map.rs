// --- Memory Map Constants ---
// The board decodes 14 address lines; 0x4000-0xFFFF mirror 0x0000-0x3FFF.
pub const MEMORY_SIZE: usize = 0x4000; // 16 KiB
pub const ADDRESS_MASK: usize = 0x3FFF;

pub const ROM_START: u16 = 0x0000;
pub const ROM_END: u16 = 0x1FFF;
pub const ROM_SIZE: usize = (ROM_END - ROM_START + 1) as usize; // 8 KiB

pub const RAM_START: u16 = 0x2000;
pub const RAM_END: u16 = 0x23FF;
pub const RAM_SIZE: usize = (RAM_END - RAM_START + 1) as usize; // 1 KiB

pub const VRAM_START: u16 = 0x2400;
pub const VRAM_END: u16 = 0x3FFF;
pub const VRAM_SIZE: usize = (VRAM_END - VRAM_START + 1) as usize; // 7 KiB

// --- Screen Geometry ---
// VRAM holds one bit per pixel, stored as 224 columns of 32 bytes each.
// The cabinet rotates the CRT 90 degrees counter-clockwise, so on screen the
// picture is 224 pixels wide by 256 tall.
pub const SCREEN_WIDTH: usize = 224;
pub const SCREEN_HEIGHT: usize = 256;
pub const BYTES_PER_COLUMN: usize = SCREEN_HEIGHT / 8; // 32
