//! Plain-text output for a lookup result.

use chrono::{Datelike, Weekday};
use clima_core::{ForecastDay, Language, LookupResult, aligner::round_half_up};

pub fn render(result: &LookupResult, language: Language) -> String {
    let mut out = format!(
        "{}\n  {}°  {}\n",
        result.location.display_name(),
        round_half_up(result.current.temperature),
        result.current.describe_in(language)
    );

    if !result.upcoming.is_empty() {
        let title = match language {
            Language::Pt => "Próximos dias",
            Language::En => "Next days",
        };
        out.push_str(&format!("\n{title}\n"));
        for day in &result.upcoming {
            out.push_str(&format!("  {}\n", forecast_line(day, language)));
        }
    }

    out
}

fn forecast_line(day: &ForecastDay, language: Language) -> String {
    let label = match day.naive_date() {
        Some(date) => format!(
            "{:<14} {:>2}/{:02}",
            weekday_name(date.weekday(), language),
            date.day(),
            date.month()
        ),
        None => day.date.clone(),
    };

    format!("{label}  {:>3}° / {:>3}°  {}", day.max_temp, day.min_temp, day.description)
}

fn weekday_name(weekday: Weekday, language: Language) -> &'static str {
    match (language, weekday) {
        (Language::En, Weekday::Mon) => "Monday",
        (Language::En, Weekday::Tue) => "Tuesday",
        (Language::En, Weekday::Wed) => "Wednesday",
        (Language::En, Weekday::Thu) => "Thursday",
        (Language::En, Weekday::Fri) => "Friday",
        (Language::En, Weekday::Sat) => "Saturday",
        (Language::En, Weekday::Sun) => "Sunday",
        (Language::Pt, Weekday::Mon) => "Segunda-feira",
        (Language::Pt, Weekday::Tue) => "Terça-feira",
        (Language::Pt, Weekday::Wed) => "Quarta-feira",
        (Language::Pt, Weekday::Thu) => "Quinta-feira",
        (Language::Pt, Weekday::Fri) => "Sexta-feira",
        (Language::Pt, Weekday::Sat) => "Sábado",
        (Language::Pt, Weekday::Sun) => "Domingo",
    }
}

#[cfg(test)]
mod tests {
    use clima_core::{CurrentConditions, Location};

    use super::*;

    fn result(upcoming: Vec<ForecastDay>) -> LookupResult {
        LookupResult {
            location: Location {
                name: "São Paulo".into(),
                country: "Brasil".into(),
                latitude: -23.55,
                longitude: -46.63,
            },
            current: CurrentConditions {
                temperature: 24.6,
                condition_code: 2,
                timestamp: "2025-11-03T02:00".into(),
            },
            upcoming,
        }
    }

    fn day(date: &str) -> ForecastDay {
        ForecastDay {
            date: date.into(),
            max_temp: 28,
            min_temp: 19,
            condition_code: 45,
            description: "Nevoeiro".into(),
            icon_id: "wi-fog".into(),
        }
    }

    #[test]
    fn renders_location_and_current() {
        let text = render(&result(vec![]), Language::Pt);

        assert!(text.starts_with("São Paulo, Brasil\n"));
        assert!(text.contains("25°  Parcialmente nublado"));
        assert!(!text.contains("Próximos dias"));
    }

    #[test]
    fn renders_upcoming_days() {
        let text = render(&result(vec![day("2025-11-04"), day("not-a-date")]), Language::Pt);

        assert!(text.contains("Próximos dias"));
        assert!(text.contains("Terça-feira"));
        assert!(text.contains(" 4/11"));
        assert!(text.contains("not-a-date"));
        assert!(text.contains(" 28° /  19°  Nevoeiro"));
    }

    #[test]
    fn renders_exact_layout() {
        let text = render(&result(vec![day("2025-11-04")]), Language::En);

        assert_eq!(
            text,
            "São Paulo, Brasil\n  25°  Partly cloudy\n\nNext days\n  Tuesday         4/11   28° /  19°  Nevoeiro\n"
        );
    }

    #[test]
    fn english_labels() {
        let text = render(&result(vec![day("2025-11-04")]), Language::En);

        assert!(text.contains("Partly cloudy"));
        assert!(text.contains("Next days"));
        assert!(text.contains("Tuesday"));
    }
}
