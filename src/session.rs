//! In-progress walk: today's target, accepted colors and steps.

use chrono::NaiveDate;
use huestep_canvas::ImageSource;
use huestep_color::{is_similar, Color};
use image::RgbaImage;
use thiserror::Error;

use crate::config::StepSettings;
use crate::model::{CollectedColor, DayMarble, TodayColor};
use crate::steps::{display_distance_km, distance_km, DEFAULT_METERS_PER_STEP};

/// Largest preview the photo picker shows before scaling down.
pub const PICKER_MAX_WIDTH: u32 = 800;
pub const PICKER_MAX_HEIGHT: u32 = 600;

/// Why a color could not be collected or removed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// The sampled color is not in the same family as today's target
    #[error("{candidate} is not close enough to today's color {target}")]
    NotSimilar { target: Color, candidate: Color },

    /// No collected color at this index
    #[error("No collected color at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// State of one day's walk.
#[derive(Debug, Clone)]
pub struct WalkSession {
    target: TodayColor,
    collected: Vec<CollectedColor>,
    steps: u32,
    meters_per_step: f64,
}

impl WalkSession {
    pub fn new(target: TodayColor) -> Self {
        Self {
            target,
            collected: Vec::new(),
            steps: 0,
            meters_per_step: DEFAULT_METERS_PER_STEP,
        }
    }

    /// New session using the configured stride.
    pub fn with_settings(target: TodayColor, settings: &StepSettings) -> Self {
        Self::new(target).with_meters_per_step(settings.meters_per_step)
    }

    pub fn with_meters_per_step(mut self, meters_per_step: f64) -> Self {
        if meters_per_step.is_finite() && meters_per_step > 0.0 {
            self.meters_per_step = meters_per_step;
        }
        self
    }

    /// Resume with colors collected earlier today.
    pub fn with_collected(mut self, collected: Vec<CollectedColor>) -> Self {
        self.collected = collected;
        self
    }

    pub fn target(&self) -> &TodayColor {
        &self.target
    }

    /// Change today's target. Already collected colors stay.
    pub fn set_target(&mut self, target: TodayColor) {
        self.target = target;
    }

    pub fn collected(&self) -> &[CollectedColor] {
        &self.collected
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps;
    }

    pub fn distance_km(&self) -> f64 {
        distance_km(self.steps, self.meters_per_step)
    }

    /// Whether `candidate` would be accepted against today's target.
    pub fn accepts(&self, candidate: Color) -> bool {
        is_similar(self.target.color, candidate)
    }

    /// Accept a sampled color if it belongs to the target's family.
    pub fn collect(&mut self, color: Color, image_source: ImageSource) -> Result<(), CollectError> {
        if !self.accepts(color) {
            log::debug!("Rejected {} against target {}", color, self.target.color);
            return Err(CollectError::NotSimilar {
                target: self.target.color,
                candidate: color,
            });
        }
        self.collected.push(CollectedColor::new(color, image_source));
        log::debug!("Collected {} ({} total)", color, self.collected.len());
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<CollectedColor, CollectError> {
        if index >= self.collected.len() {
            return Err(CollectError::IndexOutOfRange {
                index,
                len: self.collected.len(),
            });
        }
        Ok(self.collected.remove(index))
    }

    /// Start over: drop collected colors. Steps belong to the step counter
    /// and are kept.
    pub fn reset(&mut self) {
        self.collected.clear();
    }

    /// Close the day into a marble. Colors keep acceptance order and the
    /// session is cleared.
    pub fn finish(&mut self, date: NaiveDate) -> DayMarble {
        let marble = DayMarble {
            date,
            colors: self.collected.iter().map(|c| c.color).collect(),
            steps: self.steps,
            distance: display_distance_km(self.steps, self.meters_per_step),
        };
        log::info!(
            "Finished walk for {}: {} colors, {} steps",
            date,
            marble.colors.len(),
            marble.steps
        );
        self.collected.clear();
        marble
    }
}

/// RGB of the pixel at `(x, y)`; alpha is ignored.
pub fn sample_pixel(image: &RgbaImage, x: u32, y: u32) -> Option<Color> {
    if x >= image.width() || y >= image.height() {
        return None;
    }
    let [r, g, b, _] = image.get_pixel(x, y).0;
    Some(Color::from_rgb(r, g, b))
}

/// Size of the picker preview for a photo: scaled down to fit
/// [`PICKER_MAX_WIDTH`] x [`PICKER_MAX_HEIGHT`], never scaled up.
pub fn preview_size(source: (u32, u32)) -> (f64, f64) {
    let (w, h) = (source.0 as f64, source.1 as f64);
    if source.0 > PICKER_MAX_WIDTH || source.1 > PICKER_MAX_HEIGHT {
        let ratio = (PICKER_MAX_WIDTH as f64 / w).min(PICKER_MAX_HEIGHT as f64 / h);
        (w * ratio, h * ratio)
    } else {
        (w, h)
    }
}

/// Map a click on the picker preview to source pixel coordinates.
pub fn map_preview_point(source: (u32, u32), x: f64, y: f64) -> Option<(u32, u32)> {
    let (pw, ph) = preview_size(source);
    if pw <= 0.0 || ph <= 0.0 || !(x >= 0.0 && y >= 0.0) {
        return None;
    }
    let sx = (x * source.0 as f64 / pw).floor();
    let sy = (y * source.1 as f64 / ph).floor();
    if sx >= source.0 as f64 || sy >= source.1 as f64 {
        return None;
    }
    Some((sx as u32, sy as u32))
}
