use serde::{Deserialize, Serialize};

use crate::math::Mat4;
use crate::state::SurfaceExtent;

/// The transform a host applies to its content: scale first, then translate
/// in content units. Both are taken about the centre of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x,
            translate_y,
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Matrix about the coordinate origin.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale_x, self.scale_y)
            * Mat4::from_translation(self.translate_x, self.translate_y)
    }

    /// Matrix about the centre of `surface`, which is where the content's
    /// transform origin sits.
    pub fn to_matrix_centered(&self, surface: SurfaceExtent) -> Mat4 {
        let cx = surface.width / 2.0;
        let cy = surface.height / 2.0;

        Mat4::from_translation(cx, cy) * self.to_matrix() * Mat4::from_translation(-cx, -cy)
    }

    pub fn content_to_screen(&self, content_pos: [f64; 2], surface: SurfaceExtent) -> [f64; 2] {
        self.to_matrix_centered(surface).transform_point(content_pos)
    }

    pub fn screen_to_content(&self, screen_pos: [f64; 2], surface: SurfaceExtent) -> [f64; 2] {
        let cx = surface.width / 2.0;
        let cy = surface.height / 2.0;
        [
            (screen_pos[0] - cx) / self.scale_x - self.translate_x + cx,
            (screen_pos[1] - cy) / self.scale_y - self.translate_y + cy,
        ]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn test_identity_maps_points_to_themselves() {
        let surface = SurfaceExtent::new(400.0, 300.0);
        let t = Transform::identity();

        assert!(t.is_identity());
        assert!(close(t.content_to_screen([17.0, 42.0], surface), [17.0, 42.0]));
    }

    #[test]
    fn test_centre_stays_put_under_pure_scale() {
        let surface = SurfaceExtent::new(400.0, 300.0);
        let t = Transform::new(2.0, 0.0, 0.0);

        assert!(close(t.content_to_screen([200.0, 150.0], surface), [200.0, 150.0]));
        assert!(close(t.content_to_screen([300.0, 150.0], surface), [400.0, 150.0]));
    }

    #[test]
    fn test_translation_is_in_content_units() {
        let surface = SurfaceExtent::new(400.0, 300.0);
        let t = Transform::new(2.0, 5.0, -10.0);

        // 5 content units at scale 2 move the centre 10 screen pixels.
        assert!(close(t.content_to_screen([200.0, 150.0], surface), [210.0, 130.0]));
    }

    #[test]
    fn test_screen_to_content_inverts() {
        let surface = SurfaceExtent::new(640.0, 480.0);
        let t = Transform::new(1.6, 33.0, -7.5);
        let content = [12.0, 345.0];

        let back = t.screen_to_content(t.content_to_screen(content, surface), surface);
        assert!(close(back, content));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Transform::new(1.5, 2.0, 3.0)).unwrap();

        assert_eq!(json["scaleX"], 1.5);
        assert_eq!(json["scaleY"], 1.5);
        assert_eq!(json["translateX"], 2.0);
        assert_eq!(json["translateY"], 3.0);
    }
}
