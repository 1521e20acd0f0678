use serde::{Deserialize, Serialize};

use crate::engine::GestureTransformEngine;
use crate::responder::GestureResponder;
use crate::state::{GestureSnapshot, SurfaceExtent};

/// One notification from the touch-dispatch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEvent {
    Start(GestureSnapshot),
    Move(GestureSnapshot),
    End(GestureSnapshot),
    Terminate(GestureSnapshot),
    Resize(SurfaceExtent),
}

impl GestureTransformEngine {
    /// Routes an event to the lifecycle and reports whether the host should repaint.
    pub fn input(&mut self, event: &GestureEvent) -> bool {
        match event {
            GestureEvent::Start(snapshot) => {
                self.on_gesture_start(snapshot);
                true
            }
            GestureEvent::Move(snapshot) => {
                let before = self.current_transform();
                self.on_gesture_move(snapshot);
                self.current_transform() != before
            }
            GestureEvent::End(snapshot) => {
                self.on_gesture_end(snapshot);
                true
            }
            GestureEvent::Terminate(snapshot) => self.on_termination_request(snapshot),
            GestureEvent::Resize(surface) => self.resize(*surface),
        }
    }
}
