mod app;
mod mesh_surface;
pub mod bezier;
pub mod config;
pub mod driver;
pub mod error;
pub mod rendering;
pub mod rope;
pub mod spring;
pub mod surface;
pub mod vector;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameResult};
use app::RopeApp;

pub use bezier::CubicBezier;
pub use config::{InputMode, Preset, ResizePolicy, RopeConfig};
pub use driver::{DriverState, FrameDriver, FrameStatus};
pub use error::ConfigError;
pub use rendering::{Renderer, Style};
pub use rope::Rope;
pub use spring::{MovablePoint, Spring};
pub use surface::{DisplayList, DrawCommand, Surface};
pub use vector::Vector;

/// Opens the window and runs the animation until the window is closed or
/// the driver is stopped. Only returns if the window cannot be created.
pub fn run(config: RopeConfig) -> GameResult {
    let window = &config.window;
    let (mut ctx, event_loop) = ContextBuilder::new("bezier_rope", "bezier_rope")
        .window_setup(WindowSetup::default().title(&window.title).vsync(window.vsync))
        .window_mode(
            WindowMode::default()
                .dimensions(window.width, window.height)
                .resizable(true),
        )
        .build()?;

    let app = RopeApp::new(&mut ctx, &config);
    event::run(ctx, event_loop, app)
}
