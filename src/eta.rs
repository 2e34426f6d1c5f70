//! Arrival time estimation, by matching the live track's progress
//! against a previously recorded reference track of the same route.
//!
//! The estimator projects the current position onto the reference
//! trajectory, then rescales the reference's remaining flight time by
//! the pace observed so far (actual elapsed time over reference
//! elapsed time on the matched portion). Every precondition failure
//! degrades to `None` ("ETA unavailable"): flight telemetry is noisy
//! and an unavailable estimate is a legitimate answer, not an error.

use log::{debug, warn};
use nalgebra::Vector2;

use crate::geo::{distance, GeoPoint};
use crate::prelude::{Duration, Epoch};
use crate::track::{FlightPath, TrackPoint};

/// Phase filter threshold applied when none is configured, in meters.
/// Excludes ground/takeoff/landing samples from route matching.
pub const DEFAULT_PHASE_ALTITUDE_M: f64 = 1_500.0;

/// Estimates when the live flight will reach the reference flight's
/// final recorded point, using the default phase filter threshold.
/// `None` whenever the tracks cannot be matched, see
/// [estimate_arrival_above].
pub fn estimate_arrival(live: &FlightPath, reference: &FlightPath) -> Option<Epoch> {
    estimate_arrival_above(live, reference, DEFAULT_PHASE_ALTITUDE_M)
}

/// Estimates the arrival instant with an explicit phase filter
/// threshold. Returns `None` when
/// - either track has no samples above the threshold,
/// - the matched reference point has no bracketing neighbors
///   (first or last filtered element),
/// - the matched portion of the reference has zero or negative
///   duration (no pace factor),
/// - the arithmetic degenerates to a non-finite instant.
pub fn estimate_arrival_above(
    live: &FlightPath,
    reference: &FlightPath,
    min_alt_m: f64,
) -> Option<Epoch> {
    let mid_live = live.above_altitude(min_alt_m);
    let mid_ref = reference.above_altitude(min_alt_m);

    if mid_live.is_empty() || mid_ref.is_empty() {
        warn!("no airborne samples to match (phase filter > {} m)", min_alt_m);
        return None;
    }

    // Earliest and most recent airborne live samples
    let start_point = mid_live[0];
    let current_point = mid_live[mid_live.len() - 1];

    let ref_start = mid_ref[nearest_index(&mid_ref, start_point.point)?];
    let closest_idx = nearest_index(&mid_ref, current_point.point)?;
    let ref_closest = mid_ref[closest_idx];

    // Bracket the matched point: a neighbor is required on both sides.
    // Matching onto the first or last filtered element is a known
    // boundary limitation of this estimator.
    if closest_idx == 0 || closest_idx + 1 == mid_ref.len() {
        warn!("matched reference point has no bracketing segment");
        return None;
    }

    let ref_prev = mid_ref[closest_idx - 1];
    let ref_next = mid_ref[closest_idx + 1];

    let projection = project_on_segment(current_point.point, ref_prev.point, ref_next.point);

    let segment_time_s = (ref_next.epoch - ref_prev.epoch).to_seconds();
    let segment_distance_m = distance(ref_prev.point, ref_next.point).meters();

    // Degenerate segment (two reference points at the same location):
    // treat the segment as not yet started.
    let progress = if segment_distance_m == 0.0 {
        0.0
    } else {
        distance(projection, ref_prev.point).meters() / segment_distance_m
    };

    let segment_remaining_s = segment_time_s * (1.0 - progress);

    // Pace factor: actual elapsed time over reference elapsed time on
    // the portion flown so far, with the partial segment backed out.
    let actual_elapsed_s = (current_point.epoch - start_point.epoch).to_seconds();
    let est_start_to_prev_s = actual_elapsed_s - segment_time_s * progress;

    let ref_start_to_prev_s = (ref_prev.epoch - ref_start.epoch).to_seconds();
    if ref_start_to_prev_s <= 0.0 {
        warn!("matched reference portion has no duration, cannot derive a pace factor");
        return None;
    }

    let pace_factor = est_start_to_prev_s / ref_start_to_prev_s;

    // Reference time from the matched point to the recorded landing
    // (last point of the unfiltered reference track).
    let ref_remaining_s = (reference.last()?.epoch - ref_closest.epoch).to_seconds();

    let remaining_s = (ref_remaining_s + segment_remaining_s) * pace_factor;

    if !remaining_s.is_finite() {
        warn!("estimated remaining time is not finite");
        return None;
    }

    debug!(
        "pace factor {:.3}, segment progress {:.3}, {:.0} s remaining",
        pace_factor, progress, remaining_s
    );

    Some(current_point.epoch + Duration::from_seconds(remaining_s))
}

/// Index of the track point closest to `from` (great-circle), ties
/// broken by the earliest index. `None` on an empty track.
fn nearest_index(track: &[TrackPoint], from: GeoPoint) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;

    for (index, point) in track.iter().enumerate() {
        let d = distance(from, point.point).meters();
        match nearest {
            Some((_, min)) if d >= min => {},
            _ => nearest = Some((index, d)),
        }
    }

    nearest.map(|(index, _)| index)
}

/// Projects `point` onto the segment from `start` to `end`, treating
/// latitude/longitude as planar coordinates. Acceptable over the short
/// segments of a recorded flight leg; the projection is clamped to the
/// segment ends.
fn project_on_segment(point: GeoPoint, start: GeoPoint, end: GeoPoint) -> GeoPoint {
    let a = Vector2::new(start.lon_deg, start.lat_deg);
    let b = Vector2::new(end.lon_deg, end.lat_deg);
    let c = Vector2::new(point.lon_deg, point.lat_deg);

    let d = b - a;
    let denom = d.dot(&d);
    if denom == 0.0 {
        return start;
    }

    let t = (c - a).dot(&d) / denom;

    if t < 0.0 {
        start
    } else if t > 1.0 {
        end
    } else {
        let p = a + d * t;
        GeoPoint::new(p.y, p.x)
    }
}
