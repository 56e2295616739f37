use ggez::GameResult;
use ggez::graphics::Color;
use crate::bezier::parameters;
use crate::config::StyleConfig;
use crate::rope::Rope;
use crate::surface::Surface;

pub struct Style {
    pub background: Color,
    pub curve_color: Color,
    pub curve_width: f32,
    pub curve_segments: u32,
    pub tangent_color: Color,
    pub tangent_width: f32,
    pub tangent_length: f32,
    pub tangent_segments: u32,
    pub point_radius: f32,
    pub endpoint_color: Color,
    pub handle_color: Color,
    pub outline: Option<(Color, f32)>,
}

impl From<&StyleConfig> for Style {
    fn from(config: &StyleConfig) -> Style {
        Style {
            background: config.background.into(),
            curve_color: config.curve_color.into(),
            curve_width: config.curve_width,
            curve_segments: config.curve_segments,
            tangent_color: config.tangent_color.into(),
            tangent_width: config.tangent_width,
            tangent_length: config.tangent_length,
            tangent_segments: config.tangent_segments,
            point_radius: config.point_radius,
            endpoint_color: config.endpoint_color.into(),
            handle_color: config.handle_color.into(),
            outline: config.outline_color.map(|color| (color.into(), config.outline_width)),
        }
    }
}

/// Draws the rope: curve, tangent ticks, then the four control points.
/// Output depends only on the rope's current positions and the style.
pub struct Renderer {
    style: Style,
}

impl Renderer {
    pub fn new(style: Style) -> Renderer {
        Renderer { style }
    }

    pub fn render(&self, rope: &Rope, surface: &mut impl Surface) -> GameResult {
        let style = &self.style;
        let curve = rope.curve();

        surface.clear(style.background);

        surface.set_stroke(style.curve_color, style.curve_width);
        let mut samples = curve.points(style.curve_segments).into_iter();
        if let Some(first) = samples.next() {
            surface.move_to(first);
            samples.for_each(|p| surface.line_to(p));
        }
        surface.stroke()?;

        surface.set_stroke(style.tangent_color, style.tangent_width);
        for t in parameters(style.tangent_segments) {
            let point = curve.point(t);
            let tangent = curve.tangent(t).normalize() * style.tangent_length;
            surface.move_to(point);
            surface.line_to(point + tangent);
            surface.stroke()?;
        }

        let handles = rope.handles();
        let points = [
            (rope.start(), style.endpoint_color),
            (rope.end(), style.endpoint_color),
            (handles[0].pos, style.handle_color),
            (handles[1].pos, style.handle_color),
        ];
        if let Some((color, width)) = style.outline {
            surface.set_stroke(color, width);
        }
        for (center, color) in points {
            surface.fill_circle(center, style.point_radius, color)?;
            if style.outline.is_some() {
                surface.stroke_circle(center, style.point_radius)?;
            }
        }

        Ok(())
    }
}
