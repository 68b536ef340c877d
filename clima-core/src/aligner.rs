//! Picks the upcoming days out of a daily series.
//!
//! "Today" is anchored to the forecast service's own current timestamp rather
//! than the local clock, so a client in another timezone still skips the
//! right day.

use tracing::debug;

use crate::{
    conditions::{self, Language},
    model::{DailySeries, ForecastDay},
};

/// Number of upcoming days shown when nothing else is configured.
pub const DEFAULT_WINDOW: usize = 5;

/// Calendar-date part of an ISO-8601 date-time (`2025-11-03T02:00` → `2025-11-03`).
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Index of the day matching `current_timestamp`, if the series contains it.
pub fn today_index(daily: &DailySeries, current_timestamp: &str) -> Option<usize> {
    let today = date_part(current_timestamp);
    daily.dates().iter().position(|d| d == today)
}

/// Up to `window` days following today, with English descriptions.
pub fn align_and_trim(
    daily: &DailySeries,
    current_timestamp: &str,
    window: usize,
) -> Vec<ForecastDay> {
    align_and_trim_in(daily, current_timestamp, window, Language::En)
}

/// Up to `window` days following today, chronological, never padded.
///
/// When the current date is not in the series, the first entry is taken as
/// today. This keeps the view populated but can misplace the window if the
/// series is shifted for some other reason.
pub fn align_and_trim_in(
    daily: &DailySeries,
    current_timestamp: &str,
    window: usize,
    language: Language,
) -> Vec<ForecastDay> {
    let today = today_index(daily, current_timestamp).unwrap_or_else(|| {
        debug!(current_timestamp, "current date not in daily series, assuming first entry");
        0
    });

    let start = today + 1;
    let end = daily.len().min(start.saturating_add(window));

    (start..end)
        .map(|i| {
            let code = daily.condition_codes()[i];
            ForecastDay {
                date: daily.dates()[i].clone(),
                max_temp: round_half_up(daily.max_temps()[i]),
                min_temp: round_half_up(daily.min_temps()[i]),
                condition_code: code,
                description: conditions::describe_in(code, language).to_string(),
                icon_id: conditions::icon_for(code).to_string(),
            }
        })
        .collect()
}

/// Round to the nearest integer, halves toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
