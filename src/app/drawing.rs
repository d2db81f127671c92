use crate::constants;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use spinv::memory_map::{BYTES_PER_COLUMN, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Blits the 1-bit framebuffer to the canvas.
///
/// VRAM is stored as 224 columns of 32 bytes each; the cabinet rotates the
/// CRT 90 degrees counter-clockwise, so bit b of byte k in column x lands at
/// screen pixel (x, 255 - (8k + b)). Set bits are white.
pub fn draw_screen(canvas: &mut Canvas<Window>, vram: &[u8]) {
    canvas.set_draw_color(constants::BACKGROUND_COLOR);
    canvas.clear();
    canvas.set_draw_color(constants::PIXEL_COLOR);

    for col in 0..SCREEN_WIDTH {
        for byte_index in 0..BYTES_PER_COLUMN {
            let byte = vram[col * BYTES_PER_COLUMN + byte_index];
            if byte == 0 {
                continue;
            }
            for bit in 0..8 {
                if byte & (1 << bit) == 0 {
                    continue;
                }
                let y = SCREEN_HEIGHT - 1 - (byte_index * 8 + bit);
                let rect = Rect::new(
                    (col as u32 * constants::SCALE_FACTOR) as i32,
                    (y as u32 * constants::SCALE_FACTOR) as i32,
                    constants::SCALE_FACTOR,
                    constants::SCALE_FACTOR,
                );
                canvas
                    .fill_rect(rect)
                    .unwrap_or_else(|e| eprintln!("Failed to draw pixel: {}", e));
            }
        }
    }
}

/// Prints the framebuffer as a raw bit grid, one VRAM column per line.
/// Bound to a diagnostic key in the main loop.
pub fn dump_vram(vram: &[u8]) {
    for column in vram.chunks(BYTES_PER_COLUMN) {
        let mut line = String::with_capacity(SCREEN_HEIGHT + BYTES_PER_COLUMN);
        for byte in column {
            for bit in 0..8 {
                line.push(if byte & (1 << bit) != 0 { '1' } else { '0' });
            }
            line.push(' ');
        }
        println!("{}", line);
    }
}
