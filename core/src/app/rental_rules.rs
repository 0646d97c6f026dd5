//! Rental rule constants
//!
//! Minimum age and licence holding period per size class.

use crate::domain::entities::SizeClass;

/// Minimum driver age for a small vehicle
pub const SMALL_MIN_AGE: u32 = 20;

/// Minimum driver age for a large vehicle
pub const LARGE_MIN_AGE: u32 = 25;

/// Whole years a licence must have been held for a small vehicle
pub const SMALL_MIN_LICENCE_YEARS: u32 = 1;

/// Whole years a licence must have been held for a large vehicle
pub const LARGE_MIN_LICENCE_YEARS: u32 = 5;

/// Large vehicles in the reference fleet
pub const CANONICAL_LARGE_COUNT: usize = 10;

/// Small vehicles in the reference fleet
pub const CANONICAL_SMALL_COUNT: usize = 20;

/// Minimum age for renting a vehicle of `class`
pub fn min_age(class: SizeClass) -> u32 {
    match class {
        SizeClass::Small => SMALL_MIN_AGE,
        SizeClass::Large => LARGE_MIN_AGE,
    }
}

/// Minimum licence holding period for renting a vehicle of `class`
pub fn min_licence_years(class: SizeClass) -> u32 {
    match class {
        SizeClass::Small => SMALL_MIN_LICENCE_YEARS,
        SizeClass::Large => LARGE_MIN_LICENCE_YEARS,
    }
}
