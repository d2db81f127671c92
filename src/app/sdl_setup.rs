use crate::constants;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::Sdl;

pub struct SdlContext {
    pub sdl: Sdl,
    pub canvas: Canvas<Window>,
    pub event_pump: sdl2::EventPump,
}

pub fn init_sdl(window_title: &str) -> Result<SdlContext, String> {
    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;

    let window = video_subsystem
        .window(
            window_title,
            constants::WINDOW_WIDTH,
            constants::WINDOW_HEIGHT,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let event_pump = sdl.event_pump()?;

    Ok(SdlContext {
        sdl,
        canvas,
        event_pump,
    })
}
