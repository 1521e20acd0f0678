use crate::config::GestureConfig;
use crate::gesture::{pan_limit, pan_offset, pinch_distance, pinch_scale};
use crate::state::{GestureBaseline, GestureSnapshot, SurfaceExtent, TransformState};
use crate::transform::Transform;

/// Turns pinch and pan gestures into a bounded scale and offset.
///
/// All mutation goes through the [`GestureResponder`](crate::GestureResponder)
/// lifecycle; callers read the result back with [`current_transform`](Self::current_transform).
#[derive(Debug, Clone)]
pub struct GestureTransformEngine {
    config: GestureConfig,
    surface: SurfaceExtent,
    state: TransformState,
    baseline: GestureBaseline,
}

impl GestureTransformEngine {
    pub fn new(config: GestureConfig, surface: SurfaceExtent) -> Self {
        Self {
            config,
            surface,
            state: TransformState::new(),
            baseline: GestureBaseline::default(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn surface(&self) -> SurfaceExtent {
        self.surface
    }

    pub fn transform_state(&self) -> TransformState {
        self.state
    }

    pub fn baseline(&self) -> GestureBaseline {
        self.baseline
    }

    /// Scale and offset as the host should paint them. Identity whenever the
    /// engine is not scalable, whatever it is tracking internally.
    pub fn current_transform(&self) -> Transform {
        if self.config.scalable {
            Transform::new(self.state.scale, self.state.offset_x, self.state.offset_y)
        } else {
            Transform::identity()
        }
    }

    /// Returns false and keeps the old extent if either dimension is unusable.
    pub fn resize(&mut self, surface: SurfaceExtent) -> bool {
        if !surface.is_valid() {
            log::debug!("Ignoring resize to {}x{}", surface.width, surface.height);
            return false;
        }

        log::info!("Surface resized to {}x{}", surface.width, surface.height);
        self.surface = surface;
        self.clamp_offsets();
        true
    }

    /// Back to scale 1, no offset and the default pinch baseline.
    pub fn reset(&mut self) {
        self.state = TransformState::new();
        self.baseline = GestureBaseline::default();
    }

    pub(crate) fn begin(&mut self, snapshot: &GestureSnapshot) {
        if snapshot.active_touch_count != 2 {
            return;
        }

        match pinch_distance(snapshot) {
            Some(distance) => {
                log::debug!("Pinch baseline captured: {distance}");
                self.baseline.initial_pinch_distance = distance;
            }
            None => log::trace!(
                "Two-finger start carried {} touch points, baseline kept",
                snapshot.touches.len()
            ),
        }
    }

    pub(crate) fn advance(&mut self, snapshot: &GestureSnapshot) {
        match snapshot.active_touch_count {
            2 => self.pinch(snapshot),
            1 if self.state.scale != 1.0 => self.pan(snapshot),
            count => log::trace!("Move with {count} touches at scale {} ignored", self.state.scale),
        }
    }

    pub(crate) fn finish(&mut self) {
        self.state.settle();
        log::debug!(
            "Gesture settled at scale {} offset ({}, {})",
            self.state.last_scale,
            self.state.last_offset_x,
            self.state.last_offset_y
        );
    }

    fn pinch(&mut self, snapshot: &GestureSnapshot) {
        let Some(distance) = pinch_distance(snapshot) else {
            log::trace!(
                "Pinch move carried {} touch points, frame dropped",
                snapshot.touches.len()
            );
            return;
        };

        let candidate = pinch_scale(
            distance,
            self.baseline.initial_pinch_distance,
            self.state.last_scale,
        );

        match candidate {
            Some(scale) if self.config.accepts_scale(scale) => {
                self.state.scale = scale;
                self.clamp_offsets();
            }
            Some(scale) => log::trace!(
                "Scale {scale} outside ({}, {}), frame dropped",
                self.config.min_scale,
                self.config.max_scale
            ),
            None => log::trace!(
                "Degenerate pinch baseline {}, frame dropped",
                self.baseline.initial_pinch_distance
            ),
        }
    }

    fn pan(&mut self, snapshot: &GestureSnapshot) {
        let scale = self.state.scale;
        if !scale.is_finite() || scale <= 0.0 {
            log::trace!("Pan at scale {scale} ignored");
            return;
        }
        let limit_x = pan_limit(scale, self.surface.width);
        let limit_y = pan_limit(scale, self.surface.height);

        self.state.offset_x = pan_offset(self.state.last_offset_x, snapshot.dx, scale, limit_x);
        self.state.offset_y = pan_offset(self.state.last_offset_y, snapshot.dy, scale, limit_y);
    }

    // A shrinking scale or surface narrows the pan range; pull the offset back inside it.
    fn clamp_offsets(&mut self) {
        let limit_x = pan_limit(self.state.scale, self.surface.width);
        let limit_y = pan_limit(self.state.scale, self.surface.height);

        self.state.offset_x = self.state.offset_x.min(limit_x).max(-limit_x);
        self.state.offset_y = self.state.offset_y.min(limit_y).max(-limit_y);
    }
}

impl Default for GestureTransformEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default(), SurfaceExtent::default())
    }
}
