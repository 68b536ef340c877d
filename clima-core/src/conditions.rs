//! WMO weather condition codes mapped to descriptions and icon identifiers.
//!
//! Icons are Weather Icons class names (`wi-*`). Every lookup is total:
//! codes outside the table resolve to a fixed fallback.

use serde::{Deserialize, Serialize};

/// Description returned for codes missing from the English table.
pub const UNKNOWN_DESCRIPTION: &str = "unknown weather";

/// Description returned for codes missing from the Portuguese table.
pub const UNKNOWN_DESCRIPTION_PT: &str = "Tempo desconhecido";

/// Icon returned for codes missing from the icon table.
pub const UNKNOWN_ICON: &str = "wi-na";

/// Language used for the geocoding hint and for condition descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::Pt, Language::En]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            _ => Err(anyhow::anyhow!("Unknown language '{value}'. Supported languages: pt, en.")),
        }
    }
}

/// English description of a condition code.
pub fn describe(code: i32) -> &'static str {
    describe_in(code, Language::En)
}

pub fn describe_in(code: i32, language: Language) -> &'static str {
    match language {
        Language::En => describe_en(code).unwrap_or(UNKNOWN_DESCRIPTION),
        Language::Pt => describe_pt(code).unwrap_or(UNKNOWN_DESCRIPTION_PT),
    }
}

/// Icon identifier of a condition code.
pub fn icon_for(code: i32) -> &'static str {
    match code {
        0 => "wi-day-sunny",
        1 => "wi-day-sunny-overcast",
        2 => "wi-day-cloudy",
        3 => "wi-cloudy",
        45 | 48 => "wi-fog",
        51 | 53 => "wi-sprinkle",
        55 => "wi-showers",
        56 | 57 => "wi-rain-mix",
        61 => "wi-rain",
        63 => "wi-rain-mix",
        65 => "wi-rain-wind",
        66 | 67 => "wi-rain-mix",
        71 | 73 | 77 | 85 => "wi-snow",
        75 | 86 => "wi-snow-wind",
        80 | 81 => "wi-showers",
        82 => "wi-rain-wind",
        95 => "wi-thunderstorm",
        96 => "wi-storm-showers",
        99 => "wi-hail",
        _ => UNKNOWN_ICON,
    }
}

fn describe_en(code: i32) -> Option<&'static str> {
    let text = match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snowfall",
        73 => "Moderate snowfall",
        75 => "Heavy snowfall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => return None,
    };
    Some(text)
}

fn describe_pt(code: i32) -> Option<&'static str> {
    let text = match code {
        0 => "Céu limpo",
        1 => "Principalmente limpo",
        2 => "Parcialmente nublado",
        3 => "Encoberto",
        45 | 48 => "Nevoeiro",
        51 => "Garoa leve",
        53 => "Garoa moderada",
        55 => "Garoa forte",
        56 => "Garoa congelante",
        57 => "Garoa congelante forte",
        61 => "Chuva leve",
        63 => "Chuva moderada",
        65 => "Chuva forte",
        66 => "Chuva congelante",
        67 => "Chuva congelante forte",
        71 => "Neve leve",
        73 => "Neve moderada",
        75 => "Neve intensa",
        77 => "Grânulos de neve",
        80 => "Pancadas de chuva leves",
        81 => "Pancadas moderadas",
        82 => "Pancadas fortes",
        85 => "Neve fraca",
        86 => "Neve forte",
        95 => "Tempestade",
        96 => "Tempestade com granizo",
        99 => "Tempestade severa",
        _ => return None,
    };
    Some(text)
}
