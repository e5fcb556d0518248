//! Picks today's target color.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::Serialize;

use super::catalog::{Catalog, NOVEMBER_ELEVENTH};
use super::seeded::{date_seed, seeded_random};
use super::{ColorRecommendation, Season, TimeOfDay, Weather};

/// Share of draws that use the weather pool.
const WEATHER_SHARE: f64 = 0.3;
/// Draws below this (and above [`WEATHER_SHARE`]) use the seasonal pool.
const SEASONAL_SHARE: f64 = 0.8;

/// Which pool a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationSource {
    /// November 11.
    Fixed,
    Weather,
    Seasonal,
    TimeOfDay,
    /// The chosen and seasonal pools were both empty.
    Fallback,
}

/// A recommendation plus the context that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub color: ColorRecommendation,
    pub season: Season,
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
    pub source: RecommendationSource,
}

/// Deterministic per-day recommender over an injected [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl Default for RecommendationEngine<'static> {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recommendation for the local wall clock.
    pub fn recommend_now(&self) -> Recommendation {
        self.recommend(Local::now().naive_local())
    }

    /// Recommendation for a local date and hour. Same date gives the same
    /// color unless the time-of-day pool is chosen, which depends on the hour.
    pub fn recommend(&self, at: NaiveDateTime) -> Recommendation {
        let date = at.date();
        let month = date.month();
        let season = Season::from_month(month);
        let time_of_day = TimeOfDay::from_hour(at.hour());

        let seed = date_seed(date);
        let selector = seeded_random(seed);
        let weather = Weather::simulate(month, selector);

        if month == 11 && date.day() == 11 {
            return Recommendation {
                color: NOVEMBER_ELEVENTH,
                season,
                weather,
                time_of_day,
                source: RecommendationSource::Fixed,
            };
        }

        let (mut source, mut pool) = if selector < WEATHER_SHARE {
            (RecommendationSource::Weather, self.catalog.weather_pool(weather))
        } else if selector < SEASONAL_SHARE {
            (RecommendationSource::Seasonal, self.catalog.seasonal_pool(season))
        } else {
            (RecommendationSource::TimeOfDay, self.catalog.time_pool(time_of_day))
        };

        if pool.is_empty() {
            log::debug!("{:?} pool is empty, falling back to {} colors", source, season);
            source = RecommendationSource::Seasonal;
            pool = self.catalog.seasonal_pool(season);
        }
        if pool.is_empty() {
            source = RecommendationSource::Fallback;
            pool = &self.catalog.all_colors;
        }

        let color = if pool.is_empty() {
            log::warn!("Color catalog is empty, using the fixed recommendation");
            source = RecommendationSource::Fallback;
            NOVEMBER_ELEVENTH
        } else {
            let index = ((seeded_random(seed + 1) * pool.len() as f64).floor() as usize)
                .min(pool.len() - 1);
            pool[index]
        };

        log::debug!(
            "Recommendation for {}: season={} weather={} time={} source={:?} color={}",
            date,
            season,
            weather,
            time_of_day,
            source,
            color.color
        );

        Recommendation {
            color,
            season,
            weather,
            time_of_day,
            source,
        }
    }

    pub fn recommended_color(&self, at: NaiveDateTime) -> ColorRecommendation {
        self.recommend(at).color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn at(date: &str, hour: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    fn hex(date: &str, hour: u32) -> String {
        RecommendationEngine::default()
            .recommended_color(at(date, hour))
            .color
            .to_string()
    }

    #[test]
    fn test_november_eleventh_is_fixed() {
        let engine = RecommendationEngine::default();
        for (date, hour) in [("2024-11-11", 0), ("2025-11-11", 13), ("2031-11-11", 23)] {
            let rec = engine.recommend(at(date, hour));
            assert_eq!(rec.source, RecommendationSource::Fixed);
            assert_eq!(rec.color.color.to_string(), "#0077B6");
            assert_eq!(rec.color.name, "Ocean");
            assert_eq!(rec.color.desc, "바다");
        }
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(hex("2025-10-18", 12), "#FFD60A");
        assert_eq!(hex("2024-03-15", 12), "#B4D455");
        assert_eq!(hex("2025-01-05", 12), "#B57EDC");
        assert_eq!(hex("2025-06-20", 12), "#06A77D");
        assert_eq!(hex("2025-07-01", 12), "#FF9F1C");
        assert_eq!(hex("2025-04-02", 12), "#FFB3D9");
        assert_eq!(hex("2025-08-09", 12), "#40916C");
        assert_eq!(hex("2025-09-09", 12), "#8D99AE");
        assert_eq!(hex("2026-10-18", 12), "#FF8C42");
        assert_eq!(hex("2025-01-01", 12), "#EDF2F4");
        assert_eq!(hex("2025-06-04", 12), "#0077B6");
    }

    #[test]
    fn test_weather_pool_dates() {
        let engine = RecommendationEngine::default();

        let snowy = engine.recommend(at("2025-01-02", 12));
        assert_eq!(snowy.weather, Weather::Snowy);
        assert_eq!(snowy.source, RecommendationSource::Weather);
        assert_eq!(snowy.color.name, "Frost");

        let rainy = engine.recommend(at("2025-06-02", 12));
        assert_eq!(rainy.weather, Weather::Rainy);
        assert_eq!(rainy.color.name, "Stormy");

        let sunny = engine.recommend(at("2025-03-04", 12));
        assert_eq!(sunny.weather, Weather::Sunny);
        assert_eq!(sunny.color.color.to_string(), "#FF9F1C");

        assert_eq!(hex("2025-02-14", 12), "#FFC947");
        assert_eq!(hex("2025-05-05", 12), "#FFD60A");
    }

    #[test]
    fn test_time_of_day_pool_depends_on_hour() {
        let engine = RecommendationEngine::default();
        assert_eq!(
            engine.recommend(at("2024-12-25", 3)).source,
            RecommendationSource::TimeOfDay
        );
        assert_eq!(hex("2024-12-25", 3), "#1D3557");
        assert_eq!(hex("2024-12-25", 9), "#FFE4E1");
        assert_eq!(hex("2024-12-25", 14), "#FFD60A");
        assert_eq!(hex("2024-12-25", 19), "#FF8C42");
    }

    #[test]
    fn test_same_date_is_deterministic() {
        let engine = RecommendationEngine::default();
        let a = engine.recommend(at("2025-10-18", 8));
        let b = engine.recommend(at("2025-10-18", 22));
        // Weather pool day, so the hour does not matter.
        assert_eq!(a.color, b.color);
        assert_eq!(engine.recommend(at("2025-10-18", 8)), a);
    }

    #[test]
    fn test_empty_pool_falls_back_to_season() {
        let standard = Catalog::standard();
        let catalog = Catalog {
            weather: HashMap::new(),
            ..standard.clone()
        };
        let engine = RecommendationEngine::new(&catalog);
        // 2025-10-18 draws the weather pool in the standard catalog.
        let rec = engine.recommend(at("2025-10-18", 12));
        assert_eq!(rec.source, RecommendationSource::Seasonal);
        assert!(catalog.seasonal_pool(Season::Autumn).contains(&rec.color));
    }

    #[test]
    fn test_empty_catalog_still_answers() {
        let catalog = Catalog::default();
        let engine = RecommendationEngine::new(&catalog);
        let rec = engine.recommend(at("2025-10-18", 12));
        assert_eq!(rec.source, RecommendationSource::Fallback);
        assert_eq!(rec.color, NOVEMBER_ELEVENTH);
    }
}
