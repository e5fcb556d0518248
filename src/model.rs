//! Data model shared by the walk session, the store and the reports.
//!
//! Field names serialize in camelCase so a stored document keeps the shape
//! `{ marbles, collectedColors, todayColor, currentSteps, updatedAt }`.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use huestep_canvas::ImageSource;
use huestep_color::Color;
use serde::{Deserialize, Serialize};

use crate::recommend::ColorRecommendation;

/// Opaque handle of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

impl UserId {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }

    /// Id usable as a file stem: anything outside `[A-Za-z0-9_-]` becomes `_`.
    pub fn file_stem(&self) -> String {
        self.id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A sampled color the user accepted, with the photo it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedColor {
    pub color: Color,
    pub image_source: ImageSource,
}

impl CollectedColor {
    pub fn new(color: Color, image_source: ImageSource) -> Self {
        Self {
            color,
            image_source,
        }
    }
}

/// One finished day: its colors in acceptance order plus step totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMarble {
    /// Calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub colors: Vec<Color>,
    pub steps: u32,
    /// Kilometers.
    pub distance: f64,
}

impl DayMarble {
    /// Key used for upserts and calendar lookups.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The target color the user picked for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayColor {
    pub color: Color,
    #[serde(default)]
    pub name: String,
    pub desc: String,
}

impl From<&ColorRecommendation> for TodayColor {
    fn from(rec: &ColorRecommendation) -> Self {
        Self {
            color: rec.color,
            name: rec.name.to_string(),
            desc: rec.desc.to_string(),
        }
    }
}

/// Everything persisted for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub marbles: Vec<DayMarble>,
    #[serde(default)]
    pub collected_colors: Vec<CollectedColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_color: Option<TodayColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_steps: Option<u32>,
    /// Set by the store on every write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserData {
    pub fn marble_for(&self, date: NaiveDate) -> Option<&DayMarble> {
        self.marbles.iter().find(|m| m.date == date)
    }
}

/// Replace any marble with the same date, then append `marble`.
///
/// The replaced day moves to the end, matching filter-then-append storage.
pub fn upsert_marble(marbles: &mut Vec<DayMarble>, marble: DayMarble) {
    marbles.retain(|m| m.date != marble.date);
    marbles.push(marble);
}
