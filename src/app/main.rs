use std::path::Path;
use std::time::Instant;
use std::{env, fs, process, thread};

// Declare modules located within the src/app/ directory
mod constants;
mod drawing;
mod emulator;
mod input;
mod sdl_setup;

use emulator::Machine;

const EXIT_IO_ERROR: i32 = 3;

fn main() -> Result<(), String> {
    env_logger::init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <rom-file>", args[0]);
        return Ok(());
    }

    // --- ROM Loading ---
    let rom_path = Path::new(&args[1]);
    let rom = match fs::read(rom_path) {
        Ok(rom) => rom,
        Err(error) => {
            eprintln!(
                "ERROR: unable to read ROM {}: {}",
                rom_path.display(),
                error
            );
            process::exit(EXIT_IO_ERROR);
        }
    };
    log::info!("loaded ROM {} ({} bytes)", rom_path.display(), rom.len());

    // --- Machine Setup ---
    let mut machine = Machine::new(&rom);
    if let Err(error) = machine.start_cpu() {
        eprintln!("ERROR: unable to spawn CPU thread: {}", error);
        process::exit(1);
    }

    let mut sdl = sdl_setup::init_sdl("Space Invaders")?;
    machine.signal_ready();

    // --- Main Loop ---
    // The refresh alternates like the video hardware: the mid-frame tick
    // raises HBLANK, the end-of-frame tick redraws from VRAM and raises
    // VBLANK.
    let mut draw_top = true;
    'main_loop: loop {
        let tick_start = Instant::now();

        let events = input::handle_input(&mut sdl.event_pump, &machine.controls);
        if events.quit {
            break 'main_loop;
        }
        if events.dump_vram {
            drawing::dump_vram(machine.lock_memory().vram());
        }

        if draw_top {
            machine.interrupts.trigger_hblank();
        } else {
            {
                let mem = machine.lock_memory();
                drawing::draw_screen(&mut sdl.canvas, mem.vram());
            }
            sdl.canvas.present();
            machine.interrupts.trigger_vblank();
        }
        draw_top = !draw_top;

        let elapsed = tick_start.elapsed();
        if elapsed < constants::HALF_FRAME_INTERVAL {
            thread::sleep(constants::HALF_FRAME_INTERVAL - elapsed);
        }
    }

    machine.stop();
    log::info!("emulator stopped");
    Ok(())
}
