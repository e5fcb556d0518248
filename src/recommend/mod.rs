//! Deterministic daily color recommendation.

mod catalog;
mod engine;
mod seeded;

use std::fmt;

use huestep_color::Color;
use serde::Serialize;

pub use catalog::{Catalog, ALL_COLORS, NOVEMBER_ELEVENTH};
pub use engine::{Recommendation, RecommendationEngine, RecommendationSource};
pub use seeded::{date_seed, seeded_random};

/// A catalog entry: color, English name and localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRecommendation {
    pub color: Color,
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Mar-May spring, Jun-Aug summer, Sep-Nov autumn, otherwise winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Sunny, Weather::Cloudy, Weather::Rainy, Weather::Snowy];

    /// Simulated weather for a month given the day's random draw.
    pub fn simulate(month: u32, random: f64) -> Self {
        if matches!(month, 12 | 1 | 2) && random < 0.2 {
            return Weather::Snowy;
        }
        if matches!(month, 6 | 7) && random < 0.4 {
            return Weather::Rainy;
        }
        if random < 0.5 {
            Weather::Sunny
        } else if random < 0.75 {
            Weather::Cloudy
        } else {
            Weather::Rainy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// [5,12) morning, [12,17) afternoon, [17,21) evening, otherwise night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl Season {
    /// Lowercase key, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl Weather {
    pub fn name(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Snowy => "snowy",
        }
    }
}

impl TimeOfDay {
    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serialized_keys() {
        for season in Season::ALL {
            assert_eq!(
                serde_json::to_string(&season).unwrap(),
                format!("\"{}\"", season)
            );
        }
        assert_eq!(Weather::Snowy.to_string(), "snowy");
        assert_eq!(TimeOfDay::Afternoon.to_string(), "afternoon");
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Autumn);
        assert_eq!(Season::from_month(11), Season::Autumn);
        assert_eq!(Season::from_month(12), Season::Winter);
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_weather_thresholds() {
        assert_eq!(Weather::simulate(1, 0.19), Weather::Snowy);
        assert_eq!(Weather::simulate(1, 0.2), Weather::Sunny);
        assert_eq!(Weather::simulate(4, 0.19), Weather::Sunny);
        assert_eq!(Weather::simulate(7, 0.39), Weather::Rainy);
        assert_eq!(Weather::simulate(8, 0.39), Weather::Sunny);
        assert_eq!(Weather::simulate(4, 0.5), Weather::Cloudy);
        assert_eq!(Weather::simulate(4, 0.75), Weather::Rainy);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(Season::Autumn.to_string(), "autumn");
        assert_eq!(TimeOfDay::Afternoon.to_string(), "afternoon");
    }
}
