//! Editor session: the shape list, the clip window and interaction state.
//!
//! Everything the controller and the render pass touch lives here and is
//! passed to them explicitly.

use planar_geom::{ClipAlgorithm, ClipBounds, Geometry, Point2, Rgb, Shape, ShapeId, ShapeKind, Stroke};

use crate::config::EditorConfig;

/// Active drawing tool.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Point,
    Line,
    Rect,
    Ellipse,
}

impl Tool {
    #[inline]
    pub fn kind(self) -> ShapeKind {
        match self {
            Tool::Point => ShapeKind::Point,
            Tool::Line => ShapeKind::Line,
            Tool::Rect => ShapeKind::Rect,
            Tool::Ellipse => ShapeKind::Ellipse,
        }
    }

    pub fn name(self) -> &'static str {
        self.kind().name()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransformMode {
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub fn name(self) -> &'static str {
        match self {
            TransformMode::Translate => "translate",
            TransformMode::Rotate => "rotate",
            TransformMode::Scale => "scale",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PivotMode {
    #[default]
    ObjectCenter,
    Custom,
}

/// Rectangular clip window in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipWindow {
    pub bounds: ClipBounds,
    pub active: bool,
    pub clipping_enabled: bool,
    pub algorithm: ClipAlgorithm,
}

impl ClipWindow {
    pub fn new(bounds: ClipBounds) -> Self {
        Self {
            bounds,
            active: false,
            clipping_enabled: false,
            algorithm: ClipAlgorithm::default(),
        }
    }

    /// Sets the window from two opposite corners and turns clipping on.
    pub fn define(&mut self, a: Point2, b: Point2) {
        self.bounds = ClipBounds::from_corners(a, b);
        self.active = true;
        self.clipping_enabled = true;
    }

    pub fn disable(&mut self) {
        self.active = false;
        self.clipping_enabled = false;
    }

    /// Moves an active window. Returns `false` when inactive.
    pub fn nudge(&mut self, dx: f64, dy: f64) -> bool {
        if !self.active {
            return false;
        }
        self.bounds = self.bounds.translated(dx, dy);
        true
    }

    /// Scales an active window about its center. Returns `false` when inactive.
    pub fn resize(&mut self, factor: f64) -> bool {
        if !self.active {
            return false;
        }
        self.bounds = self.bounds.resized(factor);
        true
    }

    /// Bounds to clip against this frame, if any.
    pub fn clip_bounds(&self) -> Option<&ClipBounds> {
        (self.active && self.clipping_enabled).then_some(&self.bounds)
    }
}

/// Transient interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub tool: Tool,
    /// Clicks collected for the shape under construction.
    pub pending_points: Vec<Point2>,
    /// May refer to a shape removed by a bulk clear; resolve through
    /// [`Session::selected_shape`].
    pub selected: Option<ShapeId>,
    pub transform_mode: Option<TransformMode>,
    pub pivot_mode: PivotMode,
    pub custom_pivot: Option<Point2>,
    pub window_definition: bool,
    pub window_pending: Vec<Point2>,
    pub stroke: Stroke,
}

impl InteractionState {
    pub fn new(stroke: Stroke) -> Self {
        Self {
            tool: Tool::default(),
            pending_points: Vec::new(),
            selected: None,
            transform_mode: None,
            pivot_mode: PivotMode::default(),
            custom_pivot: None,
            window_definition: false,
            window_pending: Vec::new(),
            stroke,
        }
    }

    /// Pivot for rotate/scale: the custom pivot when one is set in custom
    /// mode, otherwise `None` (shape center).
    pub fn effective_pivot(&self) -> Option<Point2> {
        match self.pivot_mode {
            PivotMode::Custom => self.custom_pivot,
            PivotMode::ObjectCenter => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    /// Creation order; later shapes are on top.
    pub shapes: Vec<Shape>,
    pub window: ClipWindow,
    pub interaction: InteractionState,
    pub config: EditorConfig,
    next_id: u64,
}

impl Session {
    pub fn new(config: EditorConfig) -> Self {
        let stroke = Stroke::new(Rgb::WHITE, config.default_stroke_width);
        Self {
            shapes: Vec::new(),
            window: ClipWindow::new(config.default_window),
            interaction: InteractionState::new(stroke),
            config,
            next_id: 1,
        }
    }

    /// Appends a shape with the current stroke. Ids are never reused.
    pub fn add_shape(&mut self, geometry: Geometry) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::new(id, geometry, self.interaction.stroke));
        id
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// The selected shape, or `None` when nothing is selected or the id dangles.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.interaction.selected.and_then(|id| self.shape(id))
    }

    /// Removes every shape and pending click.
    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
        self.interaction.pending_points.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
