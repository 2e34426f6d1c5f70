use rstest::rstest;

use crate::prelude::{estimate_arrival, FlightPath, TrackPoint};
use crate::tests::{init_logger, synthetic_track, CRUISE_ALT_M, STEP_MS, T0_MS};

/// Live flight flying the exact same route at the exact same rate as
/// the reference, truncated mid-cruise: the pace factor is 1 and the
/// estimate lands within one fix interval of the reference landing
/// time, shifted by the session offset.
#[test]
fn identical_route_matches_reference_landing() {
    init_logger();

    let n = 30;
    let offset_ms = 3_600_000;

    let reference = synthetic_track(n, T0_MS);
    let flown = synthetic_track(n, T0_MS + offset_ms);
    let live = FlightPath::from_points(flown.points()[..15].to_vec());

    let eta = estimate_arrival(&live, &reference).expect("matchable tracks");

    let expected = reference.last().unwrap().epoch
        + hifitime::Duration::from_milliseconds(offset_ms as f64);

    let error_s = (eta - expected).to_seconds().abs();
    assert!(
        error_s <= (STEP_MS / 1_000) as f64 + 1.0,
        "ETA off by {} s",
        error_s
    );
}

/// A live flight covering the matched portion at half the reference
/// pace must push the estimate further out than one flying at the
/// reference pace.
#[test]
fn slower_pace_extends_the_estimate() {
    init_logger();

    let n = 30;
    let reference = synthetic_track(n, T0_MS);

    let on_pace = FlightPath::from_points(reference.points()[..15].to_vec());

    // Same geometry, fixes twice as far apart in time
    let slow = FlightPath::from_points(
        (0..15)
            .map(|i| {
                let p = reference.points()[i];
                TrackPoint::new(p.point, p.alt_m, p.epoch + (p.epoch - reference.points()[0].epoch))
            })
            .collect(),
    );

    let eta_on_pace = estimate_arrival(&on_pace, &reference).unwrap();
    let eta_slow = estimate_arrival(&slow, &reference).unwrap();

    let remaining_on_pace = (eta_on_pace - on_pace.last().unwrap().epoch).to_seconds();
    let remaining_slow = (eta_slow - slow.last().unwrap().epoch).to_seconds();

    assert!(
        remaining_slow > remaining_on_pace * 1.5,
        "slow {} s vs on-pace {} s",
        remaining_slow,
        remaining_on_pace
    );
}

/// Phase filter is strict: samples at exactly the threshold altitude
/// are ground samples.
#[rstest]
#[case(300.0)]
#[case(1_500.0)]
fn unavailable_without_airborne_live_samples(#[case] alt_m: f64) {
    init_logger();

    let reference = synthetic_track(30, T0_MS);
    let live = FlightPath::from_points(
        (0..10)
            .map(|i| {
                TrackPoint::from_unix_milliseconds(
                    30.0 + 0.05 * i as f64,
                    34.0,
                    alt_m,
                    T0_MS + STEP_MS * i as i64,
                )
            })
            .collect(),
    );

    assert!(estimate_arrival(&live, &reference).is_none());
}

#[test]
fn unavailable_without_airborne_reference_samples() {
    init_logger();

    let live = synthetic_track(10, T0_MS);
    let grounded = FlightPath::from_points(
        (0..30)
            .map(|i| {
                TrackPoint::from_unix_milliseconds(
                    30.0 + 0.05 * i as f64,
                    34.0,
                    400.0,
                    T0_MS + STEP_MS * i as i64,
                )
            })
            .collect(),
    );

    assert!(estimate_arrival(&live, &grounded).is_none());
    assert!(estimate_arrival(&live, &FlightPath::new()).is_none());
}

/// Current position matching the first or last airborne reference
/// point cannot be bracketed: the estimate is unavailable, by design.
#[rstest]
#[case(29.0)] // south of the route start: matches the first airborne point
#[case(33.0)] // past the route end: matches the last airborne point
fn unavailable_without_bracketing_segment(#[case] current_lat: f64) {
    init_logger();

    let reference = synthetic_track(30, T0_MS);
    let live = FlightPath::from_points(vec![
        TrackPoint::from_unix_milliseconds(30.2, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(current_lat, 34.0, CRUISE_ALT_M, T0_MS + STEP_MS),
    ]);

    assert!(estimate_arrival(&live, &reference).is_none());
}

/// Two reference points recorded at the same location around the
/// matched one collapse the bracketing segment to zero length. The
/// estimator treats the segment as not yet started (progress 0) and
/// still produces an estimate.
#[test]
fn degenerate_reference_segment() {
    init_logger();

    let reference = FlightPath::from_points(vec![
        TrackPoint::from_unix_milliseconds(30.0, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(30.2, 34.0, CRUISE_ALT_M, T0_MS + STEP_MS),
        TrackPoint::from_unix_milliseconds(30.3, 34.0, CRUISE_ALT_M, T0_MS + 2 * STEP_MS),
        TrackPoint::from_unix_milliseconds(30.2, 34.0, CRUISE_ALT_M, T0_MS + 3 * STEP_MS),
    ]);

    let live = FlightPath::from_points(vec![
        TrackPoint::from_unix_milliseconds(30.0, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(30.3, 34.0, CRUISE_ALT_M, T0_MS + STEP_MS),
    ]);

    let eta = estimate_arrival(&live, &reference);
    assert!(eta.is_some(), "degenerate segment must degrade, not fail");
}

/// The reference portion between route start and the bracketing
/// predecessor must have positive duration, otherwise no pace factor
/// can be derived.
#[test]
fn unavailable_without_reference_base_time() {
    init_logger();

    // Predecessor recorded at the same instant as the route start
    let reference = FlightPath::from_points(vec![
        TrackPoint::from_unix_milliseconds(30.0, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(30.1, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(30.2, 34.0, CRUISE_ALT_M, T0_MS + STEP_MS),
        TrackPoint::from_unix_milliseconds(30.3, 34.0, CRUISE_ALT_M, T0_MS + 2 * STEP_MS),
    ]);

    let live = FlightPath::from_points(vec![
        TrackPoint::from_unix_milliseconds(30.0, 34.0, CRUISE_ALT_M, T0_MS),
        TrackPoint::from_unix_milliseconds(30.2, 34.0, CRUISE_ALT_M, T0_MS + STEP_MS),
    ]);

    assert!(estimate_arrival(&live, &reference).is_none());
}
