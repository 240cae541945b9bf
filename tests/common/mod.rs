#![allow(dead_code)]

use almagest::conversion::angular_distance;

/// Julian Dates spanning the 20th and 21st centuries
pub const JD_MIN: f64 = 2415020.5;
pub const JD_MAX: f64 = 2488070.5;

pub fn assert_longitude_close(actual: f64, expected: f64, tolerance: f64, label: &str) {
    let gap = angular_distance(actual, expected);
    assert!(
        gap < tolerance,
        "{label}: longitude {actual:.6}° differs from {expected:.6}° by {gap:.6}° (tolerance {tolerance}°)"
    );
}
