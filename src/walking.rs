/// Assumed average walking speed, roughly 5 km/h
pub const WALKING_SPEED_MPS: f64 = 1.4;

/// Approximate walking time in whole minutes for a distance in meters.
///
/// Half minutes round up, towards positive infinity. Negative distances are
/// not rejected and yield negative minutes.
pub fn calculate_walking_time_minutes(distance_meters: f64) -> i64 {
    let seconds = distance_meters / WALKING_SPEED_MPS;
    round_half_up(seconds / 60.0) as i64
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
