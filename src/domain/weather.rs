//! Weather Context
//!
//! Ambient conditions driving the stylist: a temperature plus the free-text
//! condition string reported by the weather provider.

use serde::{Deserialize, Serialize};

/// Season derived from temperature. Summer doubles as the hot catch-all;
/// there is no separate "hot" season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
}

impl Season {
    /// Step function: below 10°C winter, [10, 20) spring, 20°C and up summer.
    pub fn for_temperature(celsius: f32) -> Self {
        if celsius < 10.0 {
            Season::Winter
        } else if celsius < 20.0 {
            Season::Spring
        } else {
            Season::Summer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
        }
    }

    /// Case-insensitive match against a garment's free-text season label
    pub fn matches_label(&self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(self.as_str())
    }
}

/// Weather snapshot for one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherContext {
    pub temperature_c: f32,
    /// Provider condition text, e.g. "Clear", "Light rain"
    pub condition: String,
}

impl WeatherContext {
    pub fn new(temperature_c: f32, condition: impl Into<String>) -> Self {
        Self {
            temperature_c,
            condition: condition.into(),
        }
    }

    pub fn season(&self) -> Season {
        Season::for_temperature(self.temperature_c)
    }

    /// Case-insensitive substring match on "rain"/"drizzle"
    pub fn is_rainy(&self) -> bool {
        let condition = self.condition.to_lowercase();
        condition.contains("rain") || condition.contains("drizzle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_step_boundaries() {
        assert_eq!(Season::for_temperature(-5.0), Season::Winter);
        assert_eq!(Season::for_temperature(9.9), Season::Winter);
        assert_eq!(Season::for_temperature(10.0), Season::Spring);
        assert_eq!(Season::for_temperature(19.9), Season::Spring);
        assert_eq!(Season::for_temperature(20.0), Season::Summer);
        assert_eq!(Season::for_temperature(27.9), Season::Summer);
        // Hot weather has no season of its own.
        assert_eq!(Season::for_temperature(35.0), Season::Summer);
    }

    #[test]
    fn test_season_label_match_ignores_case() {
        assert!(Season::Summer.matches_label("summer"));
        assert!(Season::Summer.matches_label(" SUMMER "));
        assert!(!Season::Summer.matches_label("Winter"));
        assert!(!Season::Summer.matches_label(""));
    }

    #[test]
    fn test_rain_detection() {
        assert!(WeatherContext::new(12.0, "Light Rain").is_rainy());
        assert!(WeatherContext::new(12.0, "patchy drizzle").is_rainy());
        assert!(!WeatherContext::new(12.0, "Clear").is_rainy());
        assert!(!WeatherContext::new(12.0, "Overcast").is_rainy());
    }
}
