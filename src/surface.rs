use ggez::GameResult;
use ggez::graphics::Color;
use crate::vector::Vector;

/// Immediate-mode 2D drawing target.
///
/// A path is started with `move_to`, extended with `line_to` and drawn with
/// the current stroke style by `stroke`.
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn set_stroke(&mut self, color: Color, width: f32);

    fn move_to(&mut self, point: Vector);

    fn line_to(&mut self, point: Vector);

    fn stroke(&mut self) -> GameResult;

    fn fill_circle(&mut self, center: Vector, radius: f32, color: Color) -> GameResult;

    /// Circle outline with the current stroke style.
    fn stroke_circle(&mut self, center: Vector, radius: f32) -> GameResult;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Polyline { points: Vec<Vector>, color: Color, width: f32 },
    FillCircle { center: Vector, radius: f32, color: Color },
    StrokeCircle { center: Vector, radius: f32, color: Color, width: f32 },
}

/// Records everything drawn on it. Used headless and to compare frames.
#[derive(Clone, Debug)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    path: Vec<Vector>,
    stroke: (Color, f32),
}

impl DisplayList {
    pub fn new() -> DisplayList {
        DisplayList {
            commands: Vec::new(),
            path: Vec::new(),
            stroke: (Color::BLACK, 1.0),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Vec<Vector>> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline { points, .. } => Some(points),
            _ => None,
        })
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (Vector, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCircle { center, color, .. } => Some((*center, *color)),
            _ => None,
        })
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.path.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.stroke = (color, width);
    }

    fn move_to(&mut self, point: Vector) {
        self.path.clear();
        self.path.push(point);
    }

    fn line_to(&mut self, point: Vector) {
        self.path.push(point);
    }

    fn stroke(&mut self) -> GameResult {
        let points = std::mem::take(&mut self.path);
        let (color, width) = self.stroke;
        if points.len() >= 2 {
            self.commands.push(DrawCommand::Polyline { points, color, width });
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector, radius: f32, color: Color) -> GameResult {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
        Ok(())
    }

    fn stroke_circle(&mut self, center: Vector, radius: f32) -> GameResult {
        let (color, width) = self.stroke;
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color, width });
        Ok(())
    }
}
