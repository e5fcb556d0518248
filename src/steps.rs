//! Step count to distance conversion.

/// Stride length used when the config does not override it.
pub const DEFAULT_METERS_PER_STEP: f64 = 0.7;

/// Distance walked in kilometers.
pub fn distance_km(steps: u32, meters_per_step: f64) -> f64 {
    steps as f64 * meters_per_step / 1000.0
}

/// Distance rounded to one decimal, the precision shown and stored per day.
pub fn display_distance_km(steps: u32, meters_per_step: f64) -> f64 {
    (distance_km(steps, meters_per_step) * 10.0).round() / 10.0
}
