//! Viewer session: objects, camera, lighting and the transient status line.

use std::time::{Duration, Instant};

use crate::camera::Camera;
use crate::lighting::Lighting;
use crate::object::{ObjectKind, SceneObject};

/// How long a status message stays up after it is first shown.
pub const STATUS_DURATION: Duration = Duration::from_secs(7);

/// What a left-button drag does, chosen by the modifiers held at press time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Rotate,
    /// Shift held.
    Translate,
    /// Ctrl held.
    Zoom,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drag {
    pub mode: DragMode,
    /// Pointer position the next delta is measured from (logical pixels).
    pub last: (f32, f32),
}

/// Latest status message. Its clock starts the first time it is read.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl StatusLine {
    pub fn set(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{text}");
        self.message = Some(text);
        self.shown_at = None;
    }

    /// The message while it is fresh at `now`.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if self.message.is_none() {
            return None;
        }
        let shown = *self.shown_at.get_or_insert(now);
        if now.saturating_duration_since(shown) > STATUS_DURATION {
            self.message = None;
        }
        self.message.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct ViewerSession {
    pub objects: Vec<SceneObject>,
    /// Only objects of this kind are drawn and manipulated.
    pub current: ObjectKind,
    pub camera: Camera,
    pub lighting: Lighting,
    /// Drags and arrows move the camera instead of the object.
    pub camera_mode: bool,
    pub hud_visible: bool,
    pub drag: Option<Drag>,
    pub status: StatusLine,
}

impl ViewerSession {
    pub fn new() -> Self {
        let mut status = StatusLine::default();
        status.set("welcome to the planar 3D viewer");
        Self {
            objects: vec![SceneObject::cube(), SceneObject::pyramid()],
            current: ObjectKind::Cube,
            camera: Camera::default(),
            lighting: Lighting::default(),
            camera_mode: false,
            hud_visible: true,
            drag: None,
            status,
        }
    }

    pub fn current_object(&self) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.kind == self.current)
    }

    pub fn current_object_mut(&mut self) -> Option<&mut SceneObject> {
        let kind = self.current;
        self.objects.iter_mut().find(|o| o.kind == kind)
    }

    /// Objects that get drawn this frame.
    pub fn visible_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(move |o| o.visible && o.kind == self.current)
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}
