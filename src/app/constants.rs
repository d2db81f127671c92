use sdl2::pixels::Color;
use spinv::memory_map::{SCREEN_HEIGHT, SCREEN_WIDTH};
use std::time::Duration;

// --- Timing ---
// The video hardware interrupts the CPU twice per frame: HBLANK at
// mid-frame, VBLANK at end-of-frame, so the refresh callback runs at 120 Hz
// with the two triggers alternating.
pub const HALF_FRAME_RATE: u64 = 120;
pub const HALF_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / HALF_FRAME_RATE);

// --- Screen & Scaling ---
pub const SCALE_FACTOR: u32 = 3;
pub const WINDOW_WIDTH: u32 = SCREEN_WIDTH as u32 * SCALE_FACTOR;
pub const WINDOW_HEIGHT: u32 = SCREEN_HEIGHT as u32 * SCALE_FACTOR;

// 1-bit display: lit phosphor or nothing.
pub const BACKGROUND_COLOR: Color = Color::RGB(0, 0, 0);
pub const PIXEL_COLOR: Color = Color::RGB(255, 255, 255);
