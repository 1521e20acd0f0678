mod view_transform;

pub use view_transform::Transform;
