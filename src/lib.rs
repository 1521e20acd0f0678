mod config;
mod engine;
mod event_handler;
mod gesture;
mod math;
mod replay;
mod responder;
mod state;
mod transform;

// Re-export the main public interface
pub use config::GestureConfig;
pub use engine::GestureTransformEngine;
pub use event_handler::GestureEvent;
pub use gesture::{CAPTURE_SLOP, PAN_LIMIT_FACTOR};
pub use math::Mat4;
pub use replay::{parse_trace, replay};
pub use responder::GestureResponder;
pub use state::{
    DEFAULT_PINCH_DISTANCE, GestureBaseline, GestureSnapshot, SurfaceExtent, TouchPoint,
    TransformState,
};
pub use transform::Transform;
