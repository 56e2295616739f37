use ggez::{Context, GameResult};
use ggez::event::{self, MouseButton};
use ggez::input::keyboard::{KeyCode, KeyInput};
use crate::config::RopeConfig;
use crate::driver::{FrameDriver, FrameStatus};
use crate::mesh_surface::MeshSurface;

pub struct RopeApp {
    driver: FrameDriver,
    title: String,
}

impl RopeApp {
    pub fn new(ctx: &mut Context, config: &RopeConfig) -> RopeApp {
        let (width, height) = ctx.gfx.drawable_size();
        log::info!("Drawing surface {}x{}", width, height);
        RopeApp {
            driver: FrameDriver::from_config(config, width, height),
            title: String::new(),
        }
    }

    fn reset(&mut self, ctx: &mut Context) {
        let (width, height) = ctx.gfx.drawable_size();
        self.driver.rope_mut().reset(width, height);
        log::info!("Rope reset for {}x{}", width, height);
    }

    fn toggle_mode(&mut self) {
        let rope = self.driver.rope_mut();
        let mode = rope.mode().toggled();
        rope.set_mode(mode);
        log::info!("Input mode: {}", mode);
    }
}

impl event::EventHandler<ggez::GameError> for RopeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let title = self.driver.to_string();
        if title != self.title {
            ctx.gfx.window().set_title(&title);
            self.title = title;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut surface = MeshSurface::new();
        match self.driver.tick(&mut surface)? {
            FrameStatus::Continue => surface.present(ctx),
            FrameStatus::Halt => Ok(ctx.request_quit()),
        }
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        if button == MouseButton::Left {
            self.driver.rope_mut().pointer_pressed(x, y);
        }
        Ok(())
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> GameResult {
        if button == MouseButton::Left {
            self.driver.rope_mut().pointer_released();
        }
        Ok(())
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut Context,
        x: f32,
        y: f32,
        _xrel: f32,
        _yrel: f32,
    ) -> GameResult {
        Ok(self.driver.rope_mut().pointer_moved(x, y))
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        if repeat {
            return Ok(());
        }
        Ok(
            match input.keycode {
                Some(KeyCode::Escape) => self.driver.stop(),
                Some(KeyCode::R) => self.reset(ctx),
                Some(KeyCode::Tab) => self.toggle_mode(),
                _ => ()
            }
        )
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) -> GameResult {
        Ok(self.driver.rope_mut().resize(width, height))
    }
}
