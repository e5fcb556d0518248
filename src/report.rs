//! Weekly report and month calendar built from stored marbles.

use chrono::{Datelike, NaiveDate};
use huestep_color::{adjust_brightness, Color};
use serde::Serialize;

use crate::model::DayMarble;

/// Number of most recent marbles a weekly report covers.
pub const REPORT_DAYS: usize = 7;

/// Swatch shown for a day with no colors.
pub const EMPTY_DAY_COLOR: Color = Color::from_rgb(0xE5, 0xE7, 0xEB);

/// Darkening applied to the second stop of the report header gradient.
const HEADER_SHADE_PERCENT: f64 = -15.0;

/// One row of the report timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDay {
    pub date: NaiveDate,
    pub main_color: Color,
    pub color_count: usize,
    pub steps: u32,
}

/// Totals over the last [`REPORT_DAYS`] stored marbles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub days: Vec<ReportDay>,
    pub total_steps: u64,
    pub total_distance: f64,
    pub total_colors: usize,
    pub average_steps: u64,
}

impl WeeklyReport {
    /// Build from marbles in stored order; the last seven are used as is.
    pub fn from_marbles(marbles: &[DayMarble]) -> Self {
        let recent = &marbles[marbles.len().saturating_sub(REPORT_DAYS)..];

        let total_steps: u64 = recent.iter().map(|m| m.steps as u64).sum();
        let total_distance: f64 = recent.iter().map(|m| m.distance).sum();
        let total_colors: usize = recent.iter().map(|m| m.colors.len()).sum();
        let average_steps =
            (total_steps as f64 / recent.len().max(1) as f64).round() as u64;

        Self {
            days: recent
                .iter()
                .map(|m| ReportDay {
                    date: m.date,
                    main_color: main_color(m),
                    color_count: m.colors.len(),
                    steps: m.steps,
                })
                .collect(),
            total_steps,
            total_distance,
            total_colors,
            average_steps,
        }
    }
}

/// First collected color of the day, or the neutral swatch.
pub fn main_color(marble: &DayMarble) -> Color {
    marble.colors.first().copied().unwrap_or(EMPTY_DAY_COLOR)
}

/// Two stops of the report header: today's color and a darker shade.
pub fn header_gradient(today: Color) -> (Color, Color) {
    (today, today.adjust_brightness(HEADER_SHADE_PERCENT))
}

/// Same as [`header_gradient`] for a stored hex string.
pub fn header_gradient_hex(today: &str) -> (Color, Color) {
    (Color::parse_lossy(today), adjust_brightness(today, HEADER_SHADE_PERCENT))
}

/// Layout of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    first_day: NaiveDate,
}

impl CalendarMonth {
    /// `None` for a month outside 1..=12 or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            year,
            month,
            first_day,
        })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn starting_weekday(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn marble_for<'a>(&self, day: u32, marbles: &'a [DayMarble]) -> Option<&'a DayMarble> {
        let date = self.date(day)?;
        marbles.iter().find(|m| m.date == date)
    }

    pub fn previous(&self) -> Self {
        match self.first_day.pred_opt() {
            Some(last_of_prev) => Self::containing(last_of_prev),
            None => *self,
        }
    }

    pub fn next(&self) -> Self {
        match self.date(self.days_in_month()).and_then(|d| d.succ_opt()) {
            Some(first_of_next) => Self::containing(first_of_next),
            None => *self,
        }
    }

    /// Header label, e.g. `2025년 10월`.
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year, self.month)
    }
}

/// Long Korean date label used on the marble view and share card,
/// e.g. `2025년 10월 18일`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// Short label used in the report timeline, e.g. `10월 18일`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}월 {}일", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marble(day: u32, colors: &[&str], steps: u32, distance: f64) -> DayMarble {
        DayMarble {
            date: NaiveDate::from_ymd_opt(2025, 10, day).unwrap(),
            colors: colors.iter().map(|h| Color::parse_lossy(h)).collect(),
            steps,
            distance,
        }
    }

    #[test]
    fn test_report_uses_last_seven() {
        let marbles: Vec<_> = (1..=9)
            .map(|d| marble(d, &["#FF0000"], d * 1000, 0.5))
            .collect();
        let report = WeeklyReport::from_marbles(&marbles);
        assert_eq!(report.days.len(), 7);
        assert_eq!(report.days[0].date.day(), 3);
        assert_eq!(report.total_steps, (3..=9).map(|d| d * 1000).sum::<u64>());
        assert_eq!(report.total_colors, 7);
        assert!((report.total_distance - 3.5).abs() < 1e-9);
        assert_eq!(report.average_steps, 6000);
    }

    #[test]
    fn test_report_average_rounds() {
        let marbles = vec![marble(1, &[], 1, 0.0), marble(2, &[], 2, 0.0)];
        // 3 / 2 = 1.5 rounds up
        assert_eq!(WeeklyReport::from_marbles(&marbles).average_steps, 2);
    }

    #[test]
    fn test_empty_report() {
        let report = WeeklyReport::from_marbles(&[]);
        assert!(report.days.is_empty());
        assert_eq!(report.total_steps, 0);
        assert_eq!(report.average_steps, 0);
    }

    #[test]
    fn test_main_color_fallback() {
        assert_eq!(main_color(&marble(1, &[], 0, 0.0)), EMPTY_DAY_COLOR);
        assert_eq!(
            main_color(&marble(1, &["#06A77D", "#FF0000"], 0, 0.0)).to_string(),
            "#06A77D"
        );
    }

    #[test]
    fn test_header_gradient() {
        let (a, b) = header_gradient(Color::from_rgb(0x80, 0x80, 0x80));
        assert_eq!(a.to_string(), "#808080");
        assert_eq!(b.to_string(), "#5A5A5A");
        assert_eq!(header_gradient_hex("#808080"), (a, b));
    }

    #[test]
    fn test_calendar_month_shape() {
        let oct = CalendarMonth::new(2025, 10).unwrap();
        assert_eq!(oct.days_in_month(), 31);
        // 2025-10-01 is a Wednesday.
        assert_eq!(oct.starting_weekday(), 3);

        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().days_in_month(), 31);
        // 2025-06-01 is a Sunday.
        assert_eq!(CalendarMonth::new(2025, 6).unwrap().starting_weekday(), 0);
        assert!(CalendarMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_calendar_navigation() {
        let jan = CalendarMonth::new(2025, 1).unwrap();
        assert_eq!(jan.previous(), CalendarMonth::new(2024, 12).unwrap());
        assert_eq!(jan.previous().next(), jan);
        assert_eq!(jan.title(), "2025년 1월");
    }

    #[test]
    fn test_marble_lookup() {
        let marbles = vec![marble(18, &["#FF0000"], 10, 0.0)];
        let oct = CalendarMonth::new(2025, 10).unwrap();
        assert!(oct.marble_for(18, &marbles).is_some());
        assert!(oct.marble_for(17, &marbles).is_none());
        assert!(oct.marble_for(32, &marbles).is_none());
    }

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 8).unwrap();
        assert_eq!(format_display_date(date), "2025년 10월 8일");
        assert_eq!(format_short_date(date), "10월 8일");
    }
}
