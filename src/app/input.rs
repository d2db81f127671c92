use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;
use spinv::controls::ControlPanel;

/// Events the main loop acts on itself, rather than forwarding to the
/// control panel.
#[derive(Default)]
pub struct InputEvents {
    pub quit: bool,
    pub dump_vram: bool,
}

/// Polls SDL events and forwards key presses/releases to the control panel.
pub fn handle_input(event_pump: &mut EventPump, controls: &ControlPanel) -> InputEvents {
    let mut events = InputEvents::default();
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                events.quit = true;
            }
            Event::KeyDown {
                keycode: Some(Keycode::V),
                repeat: false,
                ..
            } => {
                events.dump_vram = true;
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                controls.key_down(key);
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                controls.key_up(key);
            }
            _ => {} // Ignore other events
        }
    }
    events
}
