//! # Constants and type definitions for Almagest
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `almagest` library.
//!
//! ## Overview
//!
//! - Time origins and scales (J2000.0, Julian century, Julian millennium)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, AU ↔ km)
//! - Fixed corrections shared by every position model (aberration, speed step)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian Date of J2000.0 (2000-01-01 12:00:00 TT)
pub const J2000: JulianDate = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian millennium (time argument of the VSOP87 series)
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Fixed first-order aberration applied to every body going through the geocentric transform
/// (−20.4955″).
pub const ABERRATION_CORRECTION: Degree = -0.005694;

/// Constant of annual aberration for the Sun, divided by the Earth–Sun distance in AU.
pub const SOLAR_ABERRATION: ArcSec = -20.4898;

/// Default half-width of the central difference used for longitude speeds (days)
pub const DEFAULT_SPEED_STEP: f64 = 0.01;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date, TT scale (days)
pub type JulianDate = f64;
/// Angular rate in degrees per day
pub type DegreePerDay = f64;
