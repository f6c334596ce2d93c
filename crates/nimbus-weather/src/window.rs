//! Windowing helpers: single-day views over multi-day datasets.

use crate::types::{HourlyEntry, UvDayResponse, UvResponse};

pub const HOURS_PER_DAY: usize = 24;

/// The upstream UV forecast never extends past 3 days.
pub const UV_FORECAST_DAYS: usize = 3;

/// The contiguous 24-entry slice for a 0-based day index, or `None` when
/// the dataset does not cover that day.
pub fn hourly_day_slice(hourly: &[HourlyEntry], day: usize) -> Option<&[HourlyEntry]> {
    let start = day.checked_mul(HOURS_PER_DAY)?;
    let end = start.checked_add(HOURS_PER_DAY)?;
    hourly.get(start..end)
}

/// Single-day view of a UV forecast. Indices beyond the upstream horizon
/// yield `available: false` with an empty sequence rather than an error.
pub fn uv_day(response: &UvResponse, day: usize) -> UvDayResponse {
    UvDayResponse {
        code: response.code.clone(),
        daily: response.daily.get(day).cloned().into_iter().collect(),
        available: day < UV_FORECAST_DAYS,
    }
}
