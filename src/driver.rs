use std::fmt::{Display, Formatter};
use ggez::GameResult;
use crate::config::RopeConfig;
use crate::rendering::{Renderer, Style};
use crate::rope::Rope;
use crate::spring::Spring;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// Whether the host should schedule another frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Halt,
}

/// Owns the simulation and advances it one frame per `tick`.
pub struct FrameDriver {
    rope: Rope,
    spring: Spring,
    renderer: Renderer,
    state: DriverState,
    frames: u64,
}

impl FrameDriver {
    pub fn new(rope: Rope, spring: Spring, renderer: Renderer) -> FrameDriver {
        FrameDriver {
            rope,
            spring,
            renderer,
            state: DriverState::Running,
            frames: 0,
        }
    }

    pub fn from_config(config: &RopeConfig, width: f32, height: f32) -> FrameDriver {
        FrameDriver::new(
            Rope::new(width, height, &config.layout, &config.input),
            config.spring.spring(),
            Renderer::new(Style::from(&config.style)),
        )
    }

    /// One frame: spring step for both handles, then a full redraw.
    /// A stopped driver does neither.
    pub fn tick(&mut self, surface: &mut impl Surface) -> GameResult<FrameStatus> {
        if self.state == DriverState::Stopped {
            return Ok(FrameStatus::Halt);
        }

        self.rope.step(&self.spring);
        self.renderer.render(&self.rope, surface)?;
        self.frames += 1;

        Ok(FrameStatus::Continue)
    }

    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            log::info!("Stopping after {} frames", self.frames);
            self.state = DriverState::Stopped;
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn rope_mut(&mut self) -> &mut Rope {
        &mut self.rope
    }
}

impl Display for FrameDriver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BEZIER ROPE   {}  mode (Tab): {:<6}  reset (R)  {:?}",
            self.spring, self.rope.mode(), self.state,
        )
    }
}
