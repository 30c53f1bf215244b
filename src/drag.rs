//! Pointer drag gesture state machine: `Idle -> Dragging -> Idle`.
//!
//! There is no cancel transition. Releasing the pointer always commits the
//! accumulated delta, which may be zero.

/// What a drag is moving.
#[derive(Debug, Clone, PartialEq)]
pub enum DragTarget {
    /// The canvas itself (pan).
    Canvas,
    /// The given free-form elements on the current slide.
    Elements(Vec<String>),
}

/// Delta committed when a drag ends.
#[derive(Debug, Clone, PartialEq)]
pub struct DragCommit {
    pub target: DragTarget,
    pub dx: f32,
    pub dy: f32,
}

impl DragCommit {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        target: DragTarget,
        last_x: f32,
        last_y: f32,
        dx: f32,
        dy: f32,
    },
}

impl DragGesture {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    pub fn target(&self) -> Option<&DragTarget> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging { target, .. } => Some(target),
        }
    }

    /// Delta accumulated so far, `(0, 0)` when idle.
    pub fn delta(&self) -> (f32, f32) {
        match self {
            DragGesture::Idle => (0.0, 0.0),
            DragGesture::Dragging { dx, dy, .. } => (*dx, *dy),
        }
    }

    /// Pointer down at `(x, y)`. Ignored while a drag is already running.
    pub fn begin(&mut self, target: DragTarget, x: f32, y: f32) -> bool {
        if self.is_dragging() {
            tracing::debug!("Ignoring drag start while a drag is in progress");
            return false;
        }
        *self = DragGesture::Dragging {
            target,
            last_x: x,
            last_y: y,
            dx: 0.0,
            dy: 0.0,
        };
        true
    }

    /// Pointer moved to `(x, y)`. Returns the step since the previous
    /// position, or `None` when idle.
    pub fn update(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        match self {
            DragGesture::Idle => None,
            DragGesture::Dragging {
                last_x,
                last_y,
                dx,
                dy,
                ..
            } => {
                let step = (x - *last_x, y - *last_y);
                *last_x = x;
                *last_y = y;
                *dx += step.0;
                *dy += step.1;
                Some(step)
            }
        }
    }

    /// Pointer up. Returns the commit, or `None` if no drag was running.
    pub fn end(&mut self) -> Option<DragCommit> {
        match std::mem::take(self) {
            DragGesture::Idle => None,
            DragGesture::Dragging { target, dx, dy, .. } => Some(DragCommit { target, dx, dy }),
        }
    }
}
