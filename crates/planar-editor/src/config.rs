use planar_geom::{ClipBounds, Rgb};

/// Tunables for the editor. Defaults reproduce the classic 800x600 canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// World rectangle mapped onto the window.
    pub ortho: ClipBounds,
    /// Pick radius in logical pixels, converted to world units through the
    /// current view before widening to the stroke width.
    pub hit_threshold: f64,

    pub default_stroke_width: f64,
    pub min_stroke_width: f64,
    pub max_stroke_width: f64,

    /// Clip window bounds before the user defines one.
    pub default_window: ClipBounds,
    pub window_nudge: f64,
    pub window_shrink: f64,
    pub window_grow: f64,

    pub translate_step: f64,
    /// Degrees per arrow press.
    pub rotate_step: f64,
    pub scale_up: f64,
    pub scale_down: f64,

    pub grid_spacing: f64,
    pub tick_spacing: f64,
    pub highlight: Rgb,
    pub background: Rgb,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            ortho: ClipBounds::new(-400.0, 400.0, -300.0, 300.0),
            hit_threshold: 5.0,

            default_stroke_width: 2.0,
            min_stroke_width: 1.0,
            max_stroke_width: 10.0,

            default_window: ClipBounds::new(-200.0, 200.0, -150.0, 150.0),
            window_nudge: 20.0,
            window_shrink: 0.9,
            window_grow: 1.1,

            translate_step: 10.0,
            rotate_step: 10.0,
            scale_up: 1.1,
            scale_down: 0.9,

            grid_spacing: 50.0,
            tick_spacing: 100.0,
            highlight: Rgb::new(1.0, 0.8, 0.2),
            background: Rgb::gray(0.0),
        }
    }
}
