use ggez::{Context, GameResult};
use ggez::glam::Vec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, MeshBuilder};
use crate::surface::Surface;
use crate::vector::Vector;

const CIRCLE_TOLERANCE: f32 = 0.1;

/// `Surface` that accumulates one frame into a `MeshBuilder`, drawn by `present`.
pub struct MeshSurface {
    builder: MeshBuilder,
    background: Color,
    path: Vec<Vec2>,
    stroke: (Color, f32),
    is_empty: bool,
}

impl MeshSurface {
    pub fn new() -> MeshSurface {
        MeshSurface {
            builder: MeshBuilder::new(),
            background: Color::BLACK,
            path: Vec::new(),
            stroke: (Color::BLACK, 1.0),
            is_empty: true,
        }
    }

    pub fn present(self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, self.background);
        if !self.is_empty {
            canvas.draw(&Mesh::from_data(ctx, self.builder.build()), DrawParam::default());
        }
        canvas.finish(ctx)
    }
}

fn drawable_circle(center: Vector, radius: f32) -> bool {
    center.x.is_finite() && center.y.is_finite() && radius.is_finite() && radius > 0.0
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, color: Color) {
        self.background = color;
        self.builder = MeshBuilder::new();
        self.path.clear();
        self.is_empty = true;
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.stroke = (color, width);
    }

    fn move_to(&mut self, point: Vector) {
        self.path.clear();
        self.path.push(point.into());
    }

    fn line_to(&mut self, point: Vector) {
        self.path.push(point.into());
    }

    fn stroke(&mut self) -> GameResult {
        let path = std::mem::take(&mut self.path);
        // The tessellator rejects paths without any extent and asserts on NaN.
        let first = match path.first() {
            Some(first) => *first,
            None => return Ok(()),
        };
        if path.iter().all(|p| *p == first) || !path.iter().all(|p| p.is_finite()) {
            return Ok(());
        }
        let (color, width) = self.stroke;
        self.builder.line(&path[..], width, color)?;
        self.is_empty = false;
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector, radius: f32, color: Color) -> GameResult {
        if !drawable_circle(center, radius) {
            return Ok(());
        }
        self.builder.circle(DrawMode::fill(), Vec2::from(center), radius, CIRCLE_TOLERANCE, color)?;
        self.is_empty = false;
        Ok(())
    }

    fn stroke_circle(&mut self, center: Vector, radius: f32) -> GameResult {
        if !drawable_circle(center, radius) {
            return Ok(());
        }
        let (color, width) = self.stroke;
        self.builder.circle(DrawMode::stroke(width), Vec2::from(center), radius, CIRCLE_TOLERANCE, color)?;
        self.is_empty = false;
        Ok(())
    }
}
