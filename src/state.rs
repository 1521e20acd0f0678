use serde::{Deserialize, Serialize};

/// Baseline pinch distance used until a two-finger gesture start has been seen.
pub const DEFAULT_PINCH_DISTANCE: f64 = 150.0;

/// Page-space coordinate of one active contact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<TouchPoint> for [f64; 2] {
    fn from(point: TouchPoint) -> Self {
        [point.x, point.y]
    }
}

/// What the touch-dispatch layer reports for a gesture at one instant.
///
/// `dx`/`dy` are the cumulative displacement since the gesture started,
/// positive to the right and downwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureSnapshot {
    pub active_touch_count: usize,
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl GestureSnapshot {
    pub fn single(touch: TouchPoint, dx: f64, dy: f64) -> Self {
        Self {
            active_touch_count: 1,
            touches: vec![touch],
            dx,
            dy,
        }
    }

    pub fn pair(first: TouchPoint, second: TouchPoint) -> Self {
        Self {
            active_touch_count: 2,
            touches: vec![first, second],
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// The first two contacts, if the snapshot really carries them.
    pub fn first_pair(&self) -> Option<(TouchPoint, TouchPoint)> {
        match self.touches.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}

/// Width and height of the viewing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceExtent {
    pub width: f64,
    pub height: f64,
}

impl SurfaceExtent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Scale and offset being driven by gestures, plus the values they settled
/// at when the previous gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub last_scale: f64,
    pub last_offset_x: f64,
    pub last_offset_y: f64,
}

impl TransformState {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            last_scale: 1.0,
            last_offset_x: 0.0,
            last_offset_y: 0.0,
        }
    }

    /// Re-anchors the baselines on the current values.
    pub fn settle(&mut self) {
        self.last_scale = self.scale;
        self.last_offset_x = self.offset_x;
        self.last_offset_y = self.offset_y;
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureBaseline {
    pub initial_pinch_distance: f64,
}

impl Default for GestureBaseline {
    fn default() -> Self {
        Self {
            initial_pinch_distance: DEFAULT_PINCH_DISTANCE,
        }
    }
}
