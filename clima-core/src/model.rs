use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::conditions::{self, Language};

/// A geocoded place. Only the first geocoding match is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// `"name, country"`, or just the name when the country is unknown.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current conditions as reported by the forecast service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub condition_code: i32,
    /// Local ISO-8601 date-time of the observation, e.g. `2025-11-03T02:00`.
    pub timestamp: String,
}

impl CurrentConditions {
    pub fn describe_in(&self, language: Language) -> &'static str {
        conditions::describe_in(self.condition_code, language)
    }

    pub fn icon(&self) -> &'static str {
        conditions::icon_for(self.condition_code)
    }
}

/// Daily forecast as parallel arrays, one entry per calendar day.
///
/// All four sequences have the same length; index `i` describes the same day
/// in each of them. Use [`DailySeries::new`] to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    dates: Vec<String>,
    max_temps: Vec<f64>,
    min_temps: Vec<f64>,
    condition_codes: Vec<i32>,
}

/// The parallel arrays of a daily series had different lengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "daily series arrays differ in length (dates: {dates}, max: {max_temps}, min: {min_temps}, codes: {condition_codes})"
)]
pub struct SeriesLengthMismatch {
    pub dates: usize,
    pub max_temps: usize,
    pub min_temps: usize,
    pub condition_codes: usize,
}

impl DailySeries {
    pub fn new(
        dates: Vec<String>,
        max_temps: Vec<f64>,
        min_temps: Vec<f64>,
        condition_codes: Vec<i32>,
    ) -> Result<Self, SeriesLengthMismatch> {
        let len = dates.len();
        if max_temps.len() != len || min_temps.len() != len || condition_codes.len() != len {
            return Err(SeriesLengthMismatch {
                dates: len,
                max_temps: max_temps.len(),
                min_temps: min_temps.len(),
                condition_codes: condition_codes.len(),
            });
        }

        Ok(Self { dates, max_temps, min_temps, condition_codes })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn max_temps(&self) -> &[f64] {
        &self.max_temps
    }

    pub fn min_temps(&self) -> &[f64] {
        &self.min_temps
    }

    pub fn condition_codes(&self) -> &[i32] {
        &self.condition_codes
    }
}

/// One upcoming day, with rounded temperatures and resolved description/icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp: i32,
    pub min_temp: i32,
    pub condition_code: i32,
    pub description: String,
    pub icon_id: String,
}

impl ForecastDay {
    /// The date parsed as `YYYY-MM-DD`, if it is well formed.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn weekday(&self) -> Option<Weekday> {
        use chrono::Datelike;
        self.naive_date().map(|d| d.weekday())
    }
}

/// Everything one lookup produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub location: Location,
    pub current: CurrentConditions,
    /// Days after today in chronological order; at most the configured window.
    pub upcoming: Vec<ForecastDay>,
}
