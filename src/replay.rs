//! Recorded gesture traces, replayed through a fresh engine.

use anyhow::{Context, Result};

use crate::config::GestureConfig;
use crate::engine::GestureTransformEngine;
use crate::event_handler::GestureEvent;
use crate::state::SurfaceExtent;
use crate::transform::Transform;

/// Parses a JSON array of [`GestureEvent`]s.
pub fn parse_trace(json: &str) -> Result<Vec<GestureEvent>> {
    let events: Vec<GestureEvent> =
        serde_json::from_str(json).context("Failed to parse gesture trace")?;
    log::debug!("Parsed gesture trace with {} events", events.len());
    Ok(events)
}

/// The transform a host would sample after each event.
pub fn replay(config: GestureConfig, surface: SurfaceExtent, events: &[GestureEvent]) -> Vec<Transform> {
    let mut engine = GestureTransformEngine::new(config, surface);

    events
        .iter()
        .map(|event| {
            engine.input(event);
            engine.current_transform()
        })
        .collect()
}
