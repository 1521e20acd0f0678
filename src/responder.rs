//! Capture negotiation and gesture lifecycle, as a touch-dispatch layer sees a recognizer.

use crate::engine::GestureTransformEngine;
use crate::gesture::exceeds_slop;
use crate::state::GestureSnapshot;

/// A recognizer that competes for touch sequences.
///
/// The dispatcher asks the capture predicates before routing a sequence to
/// the recognizer, then delivers `start`, any number of `move`s and exactly
/// one `end` (or a granted termination request).
pub trait GestureResponder {
    fn should_capture_start(&self, snapshot: &GestureSnapshot) -> bool;

    fn should_capture_move(&self, snapshot: &GestureSnapshot) -> bool;

    /// Whether platform-native recognizers must be suppressed while this one
    /// owns the sequence.
    fn should_block_native_responder(&self) -> bool {
        false
    }

    fn on_gesture_start(&mut self, snapshot: &GestureSnapshot);

    fn on_gesture_move(&mut self, snapshot: &GestureSnapshot);

    fn on_gesture_end(&mut self, snapshot: &GestureSnapshot);

    /// Another recognizer wants the sequence. Always granted, and the gesture
    /// is finished as if it had ended normally.
    fn on_termination_request(&mut self, snapshot: &GestureSnapshot) -> bool {
        self.on_gesture_end(snapshot);
        true
    }
}

impl GestureResponder for GestureTransformEngine {
    /// Never claims on touch-down, so taps reach nested content.
    fn should_capture_start(&self, _snapshot: &GestureSnapshot) -> bool {
        false
    }

    fn should_capture_move(&self, snapshot: &GestureSnapshot) -> bool {
        self.config().scalable && (exceeds_slop(snapshot) || snapshot.active_touch_count == 2)
    }

    fn on_gesture_start(&mut self, snapshot: &GestureSnapshot) {
        self.begin(snapshot);
    }

    fn on_gesture_move(&mut self, snapshot: &GestureSnapshot) {
        self.advance(snapshot);
    }

    fn on_gesture_end(&mut self, _snapshot: &GestureSnapshot) {
        self.finish();
    }
}
