//! Geometry behind the pinch and pan branches, kept free of engine state.

use crate::math::distance;
use crate::state::GestureSnapshot;

/// Displacement a single touch must exceed on either axis before the engine
/// claims the gesture.
pub const CAPTURE_SLOP: f64 = 2.0;

/// Pan room granted per unit of zoom beyond 1, as a fraction of the surface.
pub const PAN_LIMIT_FACTOR: f64 = 0.25;

/// Separation of the first two contacts, or `None` when the snapshot does not
/// actually carry two of them.
pub fn pinch_distance(snapshot: &GestureSnapshot) -> Option<f64> {
    let (first, second) = snapshot.first_pair()?;
    Some(distance(first.into(), second.into()))
}

/// Scale a pinch at `current_distance` would produce. `None` for a degenerate
/// baseline or a result that is not finite and positive.
pub fn pinch_scale(current_distance: f64, initial_distance: f64, last_scale: f64) -> Option<f64> {
    if initial_distance.is_nan() || initial_distance <= 0.0 {
        return None;
    }
    let scale = current_distance / initial_distance * last_scale;
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Half-width of the allowed pan range along an axis of length `extent`.
///
/// Below a scale of 1 the range mirrors the one above it, so the limit is
/// never negative.
pub fn pan_limit(scale: f64, extent: f64) -> f64 {
    ((scale - 1.0) * PAN_LIMIT_FACTOR * extent).abs()
}

/// Moves `last` by a screen-space `delta` expressed in content units, then
/// clamps the result into `[-limit, limit]`.
pub fn pan_offset(last: f64, delta: f64, scale: f64, limit: f64) -> f64 {
    let offset = last + delta / scale;
    offset.min(limit).max(-limit)
}

/// True once the drag has moved past [`CAPTURE_SLOP`] on either axis.
pub fn exceeds_slop(snapshot: &GestureSnapshot) -> bool {
    snapshot.dx.abs() > CAPTURE_SLOP || snapshot.dy.abs() > CAPTURE_SLOP
}
