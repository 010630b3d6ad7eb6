//! Coarse-to-fine grid search for solar parameters
//!
//! Inverts [`sun_direction`] approximately: scan a coarse global grid of
//! latitude, longitude, and time of day, then refine around the coarse
//! winner. Iteration order is latitude, then longitude, then time, and only
//! a strictly smaller distance replaces the incumbent, so results are
//! deterministic down to tie-breaking.

use crate::foundation::math::Vec3;
use crate::solar::position::sun_direction;
use crate::solar::SolarError;
use chrono::NaiveTime;
use log::debug;

/// Best-match solar parameters for a target light direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarResult {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Clock time of day on the reference day
    pub time: NaiveTime,
}

/// One stage of the grid search: inclusive ranges with step sizes.
struct SearchWindow {
    lat_range: (i32, i32),
    lat_step: i32,
    lon_range: (i32, i32),
    lon_step: i32,
    /// Minutes from midnight, inclusive
    minute_range: (u32, u32),
    minute_step: u32,
}

struct Candidate {
    latitude: i32,
    longitude: i32,
    minutes: u32,
    time: NaiveTime,
    dist_sq: f64,
}

/// Find the latitude, longitude, and time of day whose sun direction best
/// matches `target`.
///
/// `target` must be a unit vector pointing toward the light source. Two
/// calls with the same target return identical results.
///
/// # Errors
///
/// [`SolarError::NoSolution`] when every grid point of a stage is
/// undefined; no result is ever fabricated from the initial sentinel.
pub fn solve(target: &Vec3) -> Result<SolarResult, SolarError> {
    let coarse = search(&coarse_window(), target).ok_or(SolarError::NoSolution)?;
    debug!(
        "coarse best: lat {}° lon {}° at {} (dist² {:.6})",
        coarse.latitude, coarse.longitude, coarse.time, coarse.dist_sq
    );

    let fine = search(&fine_window(&coarse), target).ok_or(SolarError::NoSolution)?;
    debug!(
        "fine best: lat {}° lon {}° at {} (dist² {:.6})",
        fine.latitude, fine.longitude, fine.time, fine.dist_sq
    );

    Ok(SolarResult {
        latitude: f64::from(fine.latitude),
        longitude: f64::from(fine.longitude),
        time: fine.time,
    })
}

/// Global stage: whole-earth grid, daylight hours, 10° / 1 h steps.
const fn coarse_window() -> SearchWindow {
    SearchWindow {
        lat_range: (-90, 90),
        lat_step: 10,
        lon_range: (-180, 180),
        lon_step: 10,
        minute_range: (6 * 60, 18 * 60),
        minute_step: 60,
    }
}

/// Refinement stage: ±2° around the coarse winner at 1° steps, the hour
/// after its time at 5 min steps.
fn fine_window(best: &Candidate) -> SearchWindow {
    SearchWindow {
        lat_range: (best.latitude - 2, best.latitude + 2),
        lat_step: 1,
        lon_range: (best.longitude - 2, best.longitude + 2),
        lon_step: 1,
        minute_range: (best.minutes, best.minutes + 60),
        minute_step: 5,
    }
}

/// Scan one window, keeping the first candidate with the smallest squared
/// distance. `None` when no grid point has a defined sun position.
fn search(window: &SearchWindow, target: &Vec3) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for latitude in steps_i32(window.lat_range, window.lat_step) {
        for longitude in steps_i32(window.lon_range, window.lon_step) {
            for minutes in steps_u32(window.minute_range, window.minute_step) {
                let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0)
                else {
                    continue;
                };
                let Ok(dir) = sun_direction(f64::from(latitude), f64::from(longitude), time)
                else {
                    continue;
                };
                let dist_sq = (dir - target).norm_squared();
                if best.as_ref().map_or(true, |b| dist_sq < b.dist_sq) {
                    best = Some(Candidate {
                        latitude,
                        longitude,
                        minutes,
                        time,
                        dist_sq,
                    });
                }
            }
        }
    }

    best
}

fn steps_i32((start, end): (i32, i32), step: i32) -> impl Iterator<Item = i32> {
    (start..=end).step_by(step.unsigned_abs() as usize)
}

fn steps_u32((start, end): (u32, u32), step: u32) -> impl Iterator<Item = u32> {
    (start..=end).step_by(step as usize)
}
