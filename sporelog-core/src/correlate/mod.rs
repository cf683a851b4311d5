//! Point-in-time state reconstruction.
//!
//! All three event lists are merged into one timeline and swept once. Relay
//! switches and sensor readings update a set of registers; every image
//! snapshots the registers as they stand when the sweep reaches it. Events
//! that sort after an image can never leak into its frame.
//!
//! Events sharing a timestamp keep their concatenation order: images, then
//! relay switches, then readings. An image therefore does not see a reading
//! logged in the same instant.

mod registers;

pub use registers::Registers;

use crate::event::{ActuatorStateChange, CorrelatedFrame, ImageEvent, SensorReading, TimelineEvent};
use tracing::debug;

/// Produces one frame per image, in image order.
pub fn correlate(
    images: &[ImageEvent],
    actions: &[ActuatorStateChange],
    readings: &[SensorReading],
) -> Vec<CorrelatedFrame> {
    let timeline = merge_timeline(images, actions, readings);

    let (_, frames) = timeline.into_iter().fold(
        (Registers::default(), Vec::with_capacity(images.len())),
        |(mut registers, mut frames), event| {
            match event {
                TimelineEvent::Image(image) => frames.push(registers.snapshot(image)),
                TimelineEvent::Actuator(change) => registers.apply_change(change),
                TimelineEvent::Reading(reading) => registers.apply_reading(reading),
            }
            (registers, frames)
        },
    );

    debug!(frames = frames.len(), "correlated timeline");
    frames
}

/// Concatenates images, relay switches and readings, then stable-sorts by
/// timestamp.
pub fn merge_timeline<'a>(
    images: &'a [ImageEvent],
    actions: &'a [ActuatorStateChange],
    readings: &'a [SensorReading],
) -> Vec<TimelineEvent<'a>> {
    let mut timeline: Vec<TimelineEvent<'a>> =
        Vec::with_capacity(images.len() + actions.len() + readings.len());

    timeline.extend(images.iter().map(TimelineEvent::Image));
    timeline.extend(actions.iter().map(TimelineEvent::Actuator));
    timeline.extend(readings.iter().map(TimelineEvent::Reading));

    // `sort_by_key` is stable; ties keep the order above.
    timeline.sort_by_key(TimelineEvent::timestamp);
    timeline
}
