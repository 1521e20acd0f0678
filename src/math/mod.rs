mod mat4;

pub use mat4::Mat4;

/// Euclidean length of the segment between two points.
pub fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = (a[0] - b[0]).abs();
    let dy = (a[1] - b[1]).abs();
    (dx * dx + dy * dy).sqrt()
}
