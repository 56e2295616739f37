use crate::bezier::CubicBezier;
use crate::config::{InputConfig, InputMode, LayoutConfig, ResizePolicy};
use crate::spring::{MovablePoint, Spring};
use crate::vector::Vector;

// Initial handle positions, as fractions of the viewport.
const HANDLE_START: [Vector; 2] = [Vector::new(0.3, 0.3), Vector::new(0.7, 0.7)];

/// Two fixed endpoints and two spring-driven handles spanning a viewport.
pub struct Rope {
    start: Vector,
    end: Vector,
    handles: [MovablePoint; 2],
    size: Vector,
    margin: f32,
    resize_policy: ResizePolicy,
    mode: InputMode,
    grab_radius: f32,
    grabbed: Option<usize>,
}

impl Rope {
    pub fn new(width: f32, height: f32, layout: &LayoutConfig, input: &InputConfig) -> Self {
        let mut rope = Rope {
            start: Vector::ZERO,
            end: Vector::ZERO,
            handles: [MovablePoint::at(Vector::ZERO); 2],
            size: Vector::new(width, height),
            margin: layout.endpoint_margin,
            resize_policy: layout.resize,
            mode: input.mode,
            grab_radius: input.grab_radius,
            grabbed: None,
        };
        rope.reset(width, height);
        rope
    }

    /// A rope with explicit control points, handles at rest.
    pub fn with_control_points(size: Vector, points: [Vector; 4], input: &InputConfig) -> Self {
        Rope {
            start: points[0],
            end: points[3],
            handles: [MovablePoint::at(points[1]), MovablePoint::at(points[2])],
            size,
            margin: LayoutConfig::default().endpoint_margin,
            resize_policy: ResizePolicy::KeepEndpoints,
            mode: input.mode,
            grab_radius: input.grab_radius,
            grabbed: None,
        }
    }

    pub fn reset(&mut self, width: f32, height: f32) {
        self.size = Vector::new(width, height);
        self.place_endpoints();
        for (handle, start) in self.handles.iter_mut().zip(HANDLE_START) {
            *handle = MovablePoint::at(Vector::new(start.x * width, start.y * height));
        }
        self.grabbed = None;
    }

    fn place_endpoints(&mut self) {
        let Vector { x: width, y: height } = self.size;
        self.start = Vector::new(self.margin, height / 2.0);
        self.end = Vector::new(width - self.margin, height / 2.0);
    }

    pub fn start(&self) -> Vector {
        self.start
    }

    pub fn end(&self) -> Vector {
        self.end
    }

    pub fn handles(&self) -> &[MovablePoint; 2] {
        &self.handles
    }

    pub fn size(&self) -> Vector {
        self.size
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.grabbed = None;
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.start, self.handles[0].pos, self.handles[1].pos, self.end)
    }

    pub fn step(&mut self, spring: &Spring) {
        for handle in self.handles.iter_mut() {
            spring.step(handle);
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        match self.mode {
            InputMode::Follow => {
                self.handles[0].set_target(Vector::new(x, y));
                self.handles[1].set_target(Vector::new(self.size.x - x, self.size.y - y));
            }
            InputMode::Drag => {
                if let Some(index) = self.grabbed {
                    self.handles[index].set_target(Vector::new(x, y));
                }
            }
        }
    }

    /// Grabs the handle nearest to the pointer if it lies within the grab radius.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) -> Option<usize> {
        if self.mode != InputMode::Drag {
            return None;
        }
        let pointer = Vector::new(x, y);
        self.grabbed = self.handles
            .iter()
            .enumerate()
            .map(|(i, handle)| (i, handle.pos.distance(pointer)))
            .filter(|(_, dist)| *dist < self.grab_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i);
        if let Some(index) = self.grabbed {
            log::debug!("Grabbed handle {} at ({}, {})", index + 1, x, y);
        }
        self.grabbed
    }

    pub fn pointer_released(&mut self) {
        if let Some(index) = self.grabbed.take() {
            log::debug!("Released handle {}", index + 1);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        let old_size = self.size;
        self.size = Vector::new(width, height);

        if self.resize_policy == ResizePolicy::Reflow {
            if old_size.x <= 0.0 || old_size.y <= 0.0 {
                // nothing to rescale from
                self.reset(width, height);
                log::info!("Viewport resized to {}x{} from empty, layout reset", width, height);
                return;
            }
            self.place_endpoints();
            let rescale = |v: Vector| Vector::new(v.x * width / old_size.x, v.y * height / old_size.y);
            for handle in self.handles.iter_mut() {
                handle.pos = rescale(handle.pos);
                handle.target = rescale(handle.target);
            }
        }
        log::info!("Viewport resized to {}x{} ({:?})", width, height, self.resize_policy);
    }
}
